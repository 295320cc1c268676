pub mod error;
pub mod period;

pub use error::{AppError, ErrorBody, Result};
pub use period::Period;
