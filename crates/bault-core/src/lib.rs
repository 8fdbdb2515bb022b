//! # bault-core
//!
//! Core crate for Bault. Contains configuration schemas, typed
//! identifiers, sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
