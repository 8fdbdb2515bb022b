//! Bulk move and delete over a selection.

use serde::Serialize;

use bault_core::types::ItemId;
use bault_store::{ItemStore, MoveOutcome, StoreError};

/// One item a bulk action could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFailure {
    /// The item.
    pub id: ItemId,
    /// Why it failed.
    pub error: StoreError,
}

/// Per-item outcome of a bulk action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    /// Items the action applied to.
    pub succeeded: Vec<ItemId>,
    /// Items that were already in the requested state.
    pub unchanged: Vec<ItemId>,
    /// Items that disappeared before their turn (removed by an earlier
    /// cascade in the same batch).
    pub skipped: Vec<ItemId>,
    /// Items the store rejected.
    pub failed: Vec<BulkFailure>,
    /// Total records removed, descendants included (delete only).
    pub removed: usize,
}

impl BulkReport {
    /// Whether every item either succeeded or needed no change.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Counts shown when confirming a bulk action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BulkSummary {
    /// Selected files.
    pub files: usize,
    /// Selected folders.
    pub folders: usize,
    /// Sum of the selected files' sizes.
    pub total_bytes: u64,
}

/// Move each item under `target`, collecting per-item outcomes.
pub fn move_all(store: &mut ItemStore, ids: &[ItemId], target: Option<ItemId>) -> BulkReport {
    let mut report = BulkReport::default();
    for &id in ids {
        match store.move_item(id, target) {
            Ok(MoveOutcome::Moved { .. }) => report.succeeded.push(id),
            Ok(MoveOutcome::Unchanged) => report.unchanged.push(id),
            Err(error) => report.failed.push(BulkFailure { id, error }),
        }
    }
    report
}

/// Delete each item, skipping ones an earlier cascade already removed.
pub fn delete_all(store: &mut ItemStore, ids: &[ItemId]) -> BulkReport {
    let mut report = BulkReport::default();
    for &id in ids {
        if !store.contains(id) {
            report.skipped.push(id);
            continue;
        }
        match store.delete(id) {
            Ok(removed) => {
                report.removed += removed.len();
                report.succeeded.push(id);
            }
            Err(error) => report.failed.push(BulkFailure { id, error }),
        }
    }
    report
}

/// File/folder counts and total file size of the given items.
pub fn summarize(store: &ItemStore, ids: &[ItemId]) -> BulkSummary {
    ids.iter()
        .filter_map(|id| store.get(*id))
        .fold(BulkSummary::default(), |mut summary, item| {
            if item.is_folder() {
                summary.folders += 1;
            } else {
                summary.files += 1;
                summary.total_bytes += item.size_or_zero();
            }
            summary
        })
}

#[cfg(test)]
mod tests {
    use bault_entity::CreateItem;

    use super::*;

    #[test]
    fn test_delete_all_skips_cascaded_children() {
        let mut store = ItemStore::new(1_000);
        let docs = store.create(CreateItem::folder("Docs", None)).unwrap().id;
        let inner = store.create(CreateItem::file("a.txt", Some(docs), 5)).unwrap().id;
        let other = store.create(CreateItem::file("b.txt", None, 5)).unwrap().id;

        let report = delete_all(&mut store, &[docs, inner, other]);
        assert_eq!(report.succeeded, vec![docs, other]);
        assert_eq!(report.skipped, vec![inner]);
        assert_eq!(report.removed, 3);
        assert!(store.is_empty());
    }

    #[test]
    fn test_move_all_reports_each_outcome() {
        let mut store = ItemStore::new(1_000);
        let target = store.create(CreateItem::folder("Target", None)).unwrap().id;
        let already = store.create(CreateItem::file("in.txt", Some(target), 1)).unwrap().id;
        let loose = store.create(CreateItem::file("out.txt", None, 1)).unwrap().id;

        let report = move_all(&mut store, &[target, already, loose], Some(target));
        assert_eq!(report.succeeded, vec![loose]);
        assert_eq!(report.unchanged, vec![already]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].id, target);
        assert!(matches!(report.failed[0].error, StoreError::CyclicMove { .. }));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_summarize() {
        let mut store = ItemStore::new(1_000);
        let dir = store.create(CreateItem::folder("d", None)).unwrap().id;
        let a = store.create(CreateItem::file("a", None, 7)).unwrap().id;
        let b = store.create(CreateItem::file("b", None, 3)).unwrap().id;

        let summary = summarize(&store, &[dir, a, b, ItemId::new()]);
        assert_eq!(
            summary,
            BulkSummary {
                files: 2,
                folders: 1,
                total_bytes: 10,
            }
        );
    }
}
