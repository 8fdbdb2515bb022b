//! # bault-store
//!
//! The hierarchical item store. Items live in a flat arena keyed by
//! [`ItemId`](bault_core::types::ItemId) and point at their parent by id;
//! subtrees are defined relationally, so a folder move rewrites one record
//! and a folder delete removes the transitive closure of its children.
//!
//! Queries ([`query`]) are pure functions over borrowed items so consumers
//! only ever see derived views of the collection.

pub mod error;
pub mod hierarchy;
pub mod query;
pub mod store;
pub mod tree;

pub use error::{StoreError, StoreResult};
pub use query::{category_counts, filter_by_category, search_and_sort};
pub use store::{ItemStore, MoveOutcome};
