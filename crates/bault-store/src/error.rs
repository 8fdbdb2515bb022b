//! Store error types.

use bault_core::error::{AppError, ErrorKind};
use bault_core::types::ItemId;
use thiserror::Error;

/// Errors raised by [`ItemStore`](crate::ItemStore) operations.
///
/// Every error is raised before any write, so a failed call leaves the
/// collection exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A referenced id is absent.
    #[error("item {0} not found")]
    NotFound(ItemId),
    /// A name is empty or whitespace only.
    #[error("item name cannot be empty")]
    InvalidName,
    /// The move would make a folder its own ancestor.
    #[error("cannot move folder {id} into itself or one of its descendants ({target})")]
    CyclicMove {
        /// The folder being moved.
        id: ItemId,
        /// The rejected target.
        target: ItemId,
    },
    /// The target exists but is not a folder.
    #[error("target {0} is not a folder")]
    InvalidTarget(ItemId),
    /// An item with this id already exists.
    #[error("an item with id {0} already exists")]
    DuplicateId(ItemId),
    /// A parent reference points at a missing item.
    #[error("item {item} references missing parent {parent}")]
    BrokenReference {
        /// The item holding the dangling reference.
        item: ItemId,
        /// The missing parent.
        parent: ItemId,
    },
    /// A parent chain loops back on itself.
    #[error("parent chain of item {0} contains a cycle")]
    CycleDetected(ItemId),
    /// The record violates the file/folder shape rules.
    #[error("malformed item {id}: {reason}")]
    MalformedItem {
        /// The offending item.
        id: ItemId,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// Inserting would push total file bytes past the quota.
    #[error("storage quota exceeded: {requested} bytes requested, {used} of {quota} bytes used")]
    QuotaExceeded {
        /// Bytes the rejected operation would add.
        requested: u64,
        /// Bytes already in use.
        used: u64,
        /// The quota.
        quota: u64,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// The application-wide category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidName
            | Self::CyclicMove { .. }
            | Self::InvalidTarget(_)
            | Self::MalformedItem { .. } => ErrorKind::Validation,
            Self::DuplicateId(_) => ErrorKind::Conflict,
            Self::BrokenReference { .. } | Self::CycleDetected(_) => ErrorKind::BrokenReference,
            Self::QuotaExceeded { .. } => ErrorKind::QuotaExceeded,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let kind = err.kind();
        AppError::with_source(kind, err.to_string(), err)
    }
}
