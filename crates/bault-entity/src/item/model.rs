//! Item entity model.

use std::fmt;

use bault_core::types::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an item is a file or a folder. Fixed for the item's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A leaf carrying a byte size and optional text content.
    File,
    /// A container other items may point at as their parent.
    Folder,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// A node in the item hierarchy.
///
/// Items reference their parent by id; children are never stored on the
/// parent, so moving a folder implicitly moves its whole subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier, immutable.
    pub id: ItemId,
    /// Display name. Not required to be unique among siblings.
    pub name: String,
    /// File or folder.
    pub kind: ItemKind,
    /// Parent folder (None for root-level items).
    pub parent_id: Option<ItemId>,
    /// Size in bytes. Only present on files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Set at creation, refreshed on rename and move.
    pub last_modified: DateTime<Utc>,
    /// Text payload for text-like files whose content could be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Item {
    /// Check if this item is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    /// Check if this item is a file.
    pub fn is_file(&self) -> bool {
        self.kind == ItemKind::File
    }

    /// Size used for accounting and sorting; folders count as zero.
    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }

    /// Lower-cased text after the last `.` of the name.
    ///
    /// A name without a dot yields the whole lower-cased name, so
    /// `Dockerfile` classifies as `dockerfile`.
    pub fn extension(&self) -> String {
        crate::content::extension_of(&self.name)
    }
}

/// Data required to create a new item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItem {
    /// Item name (trimmed by the store).
    pub name: String,
    /// File or folder.
    pub kind: ItemKind,
    /// Target parent folder (None for root).
    pub parent_id: Option<ItemId>,
    /// File size in bytes.
    pub size: Option<u64>,
    /// Text content.
    pub content: Option<String>,
    /// Original modification time; defaults to the creation instant.
    pub last_modified: Option<DateTime<Utc>>,
}

impl CreateItem {
    /// Describe a new folder.
    pub fn folder(name: impl Into<String>, parent_id: Option<ItemId>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Folder,
            parent_id,
            size: None,
            content: None,
            last_modified: None,
        }
    }

    /// Describe a new file of the given size.
    pub fn file(name: impl Into<String>, parent_id: Option<ItemId>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::File,
            parent_id,
            size: Some(size),
            content: None,
            last_modified: None,
        }
    }

    /// Attach text content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach an optional text content.
    pub fn with_optional_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    /// Use the given modification time instead of the creation instant.
    pub fn modified_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }

    /// Materialize the record under the given id.
    pub fn into_item(self, id: ItemId, now: DateTime<Utc>) -> Item {
        Item {
            id,
            name: self.name.trim().to_string(),
            kind: self.kind,
            parent_id: self.parent_id,
            size: self.size,
            last_modified: self.last_modified.unwrap_or(now),
            content: self.content,
        }
    }
}
