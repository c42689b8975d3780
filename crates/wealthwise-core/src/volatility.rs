//! Injectable randomness for the mutual-fund projection.
//!
//! The MF strategy multiplies each month's compounding by a small random
//! factor. Keeping the source behind a trait lets callers substitute a
//! seeded or constant source for reproducible output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound of the monthly volatility factor.
pub const VOLATILITY_MIN: f64 = 0.995;
/// Upper bound of the monthly volatility factor.
pub const VOLATILITY_MAX: f64 = 1.005;

/// Source of per-month multiplicative volatility factors.
pub trait VolatilityModel {
    /// Next monthly factor. A factor of 1.0 means no volatility.
    fn next_factor(&mut self) -> f64;
}

/// Uniform volatility in `[VOLATILITY_MIN, VOLATILITY_MAX)`.
///
/// Instantiated per call, never shared, so concurrent projections cannot
/// contend on a process-wide generator.
pub struct UniformVolatility {
    rng: StdRng,
}

impl UniformVolatility {
    /// Entropy-seeded source. Two calls produce different sequences.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed source for reproducible projections.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformVolatility {
    fn default() -> Self {
        Self::new()
    }
}

impl VolatilityModel for UniformVolatility {
    fn next_factor(&mut self) -> f64 {
        self.rng.gen_range(VOLATILITY_MIN..VOLATILITY_MAX)
    }
}

/// Constant factor, defaulting to 1.0 (no volatility).
#[derive(Debug, Clone, Copy)]
pub struct Flat(pub f64);

impl Default for Flat {
    fn default() -> Self {
        Flat(1.0)
    }
}

impl VolatilityModel for Flat {
    fn next_factor(&mut self) -> f64 {
        self.0
    }
}
