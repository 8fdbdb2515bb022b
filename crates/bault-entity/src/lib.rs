//! # bault-entity
//!
//! Domain models for Bault: the [`Item`](item::Item) record, the declarative
//! category table used by the sidebar filters, text/binary classification,
//! the storage quota value object, and folder tree view types.

pub mod category;
pub mod content;
pub mod item;
pub mod quota;
pub mod tree;

pub use category::Category;
pub use item::{CreateItem, Item, ItemKind};
pub use quota::{StorageQuota, UsageLevel};
pub use tree::{FolderNode, FolderTree};
