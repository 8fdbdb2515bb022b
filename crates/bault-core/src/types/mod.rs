//! Core type definitions used across the Bault workspace.

pub mod id;
pub mod sorting;

pub use id::ItemId;
pub use sorting::{SortDirection, SortKey, SortSpec};
