//! Folder tree structures for hierarchical display.

use bault_core::types::ItemId;
use serde::{Deserialize, Serialize};

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: ItemId,
    /// Folder name.
    pub name: String,
    /// Depth level (0 for root-level folders).
    pub depth: usize,
    /// Number of files directly inside this folder.
    pub file_count: u64,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Number of direct child folders.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// The complete folder tree of a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// Root-level folders.
    pub roots: Vec<FolderNode>,
    /// Files sitting directly at the root.
    pub root_file_count: u64,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}
