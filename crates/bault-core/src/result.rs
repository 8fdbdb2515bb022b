//! Convenience result type alias for Bault.

use crate::error::AppError;

/// A specialized `Result` type for Bault operations.
pub type AppResult<T> = Result<T, AppError>;
