//! File and folder items.

pub mod model;

pub use model::{CreateItem, Item, ItemKind};
