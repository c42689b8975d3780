pub mod error;
pub mod projection;
pub mod types;
pub mod volatility;

pub use error::WealthWiseError;
pub use projection::project;
pub use types::*;

/// Standard result type for all wealthwise operations
pub type WealthWiseResult<T> = Result<T, WealthWiseError>;
