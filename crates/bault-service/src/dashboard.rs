//! The dashboard controller.

use tracing::{debug, info};

use bault_core::config::AppConfig;
use bault_core::error::AppError;
use bault_core::result::AppResult;
use bault_core::types::{ItemId, SortKey, SortSpec};
use bault_entity::{Category, CreateItem, FolderTree, Item};
use bault_store::{ItemStore, MoveOutcome, category_counts};

use crate::bulk::{self, BulkReport, BulkSummary};
use crate::drag::DragState;
use crate::explorer::ExplorerState;
use crate::preview::{Preview, PreviewService};
use crate::seed;
use crate::selection::Selection;
use crate::upload::{ContentSource, UploadService};
use crate::usage::StorageUsage;

/// Item store plus the view state of one dashboard session.
#[derive(Debug)]
pub struct Dashboard {
    /// Items.
    store: ItemStore,
    /// Navigation, filter, search, sort.
    explorer: ExplorerState,
    /// Bulk selection.
    selection: Selection,
    /// Drag pointer.
    drag: DragState,
    /// Upload preparation.
    uploads: UploadService,
    /// File previews.
    previews: PreviewService,
}

impl Dashboard {
    /// Creates a dashboard from configuration, seeding sample data when
    /// enabled.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let mut store = ItemStore::new(config.storage.quota_bytes);
        if config.explorer.seed_sample_data {
            seed::seed(&mut store)?;
        }
        Ok(Self::with_store(store, config))
    }

    /// Creates a dashboard over an existing store.
    pub fn with_store(store: ItemStore, config: &AppConfig) -> Self {
        Self {
            store,
            explorer: ExplorerState::from_config(&config.explorer),
            selection: Selection::default(),
            drag: DragState::default(),
            uploads: UploadService::new(config.storage.clone()),
            previews: PreviewService::new(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn explorer(&self) -> &ExplorerState {
        &self.explorer
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    // ── Navigation ─────────────────────────────────────────────────

    /// The folder being viewed (None for root).
    pub fn current_folder(&self) -> Option<ItemId> {
        self.explorer.current_folder()
    }

    /// Enter a folder, or the root with `None`.
    pub fn open(&mut self, folder_id: Option<ItemId>) -> AppResult<()> {
        self.explorer.open(&self.store, folder_id)
    }

    /// Go one level up.
    pub fn go_up(&mut self) {
        self.explorer.go_up(&self.store);
    }

    /// Folders from the root to the current folder.
    pub fn breadcrumbs(&self) -> AppResult<Vec<&Item>> {
        self.explorer.breadcrumbs(&self.store)
    }

    /// The current listing after filter, search, and sort.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.explorer.visible(&self.store)
    }

    /// Per-category counts over the current folder's children.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        category_counts(self.explorer.unfiltered(&self.store))
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.explorer.set_query(query);
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.explorer.toggle_sort(key);
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.explorer.set_sort(sort);
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.explorer.toggle_category(category);
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.explorer.set_category(category);
    }

    // ── Mutations ──────────────────────────────────────────────────

    /// Create a folder inside the current folder.
    pub fn create_folder(&mut self, name: &str) -> AppResult<Item> {
        let folder = self
            .store
            .create(CreateItem::folder(name, self.current_folder()))?;
        info!(folder_id = %folder.id, name = %folder.name, "Folder created");
        Ok(folder)
    }

    /// Upload sources into the current folder.
    ///
    /// All content is read before anything is inserted; the batch is
    /// inserted atomically.
    pub async fn upload(&mut self, sources: Vec<Box<dyn ContentSource>>) -> AppResult<Vec<Item>> {
        let requests = self
            .uploads
            .prepare(self.store.quota(), self.current_folder(), &sources)
            .await?;
        let items = self.store.create_batch(requests)?;
        info!(
            count = items.len(),
            parent = ?self.current_folder(),
            used_bytes = self.store.used_bytes(),
            "Files uploaded"
        );
        Ok(items)
    }

    /// Rename an item.
    pub fn rename(&mut self, id: ItemId, new_name: &str) -> AppResult<Item> {
        let item = self.store.rename(id, new_name)?;
        info!(item_id = %id, name = %item.name, "Item renamed");
        Ok(item)
    }

    /// Move an item under `target` (None is the root).
    pub fn move_item(&mut self, id: ItemId, target: Option<ItemId>) -> AppResult<MoveOutcome> {
        let outcome = self.store.move_item(id, target)?;
        match outcome {
            MoveOutcome::Moved { from, to } => {
                info!(item_id = %id, ?from, ?to, "Item moved");
            }
            MoveOutcome::Unchanged => debug!(item_id = %id, "Item already in place"),
        }
        Ok(outcome)
    }

    /// Delete an item and everything below it. Returns the removed records.
    pub fn delete(&mut self, id: ItemId) -> AppResult<Vec<Item>> {
        let removed = self.store.delete(id)?;
        info!(item_id = %id, removed = removed.len(), "Item deleted");
        self.after_removal();
        Ok(removed)
    }

    fn after_removal(&mut self) {
        let store = &self.store;
        self.selection.retain(|id| store.contains(id));
        self.explorer.reconcile(store);

        let stale = |id: Option<ItemId>| id.is_some_and(|id| !store.contains(id));
        if stale(self.drag.dragged()) || stale(self.drag.hovered()) {
            self.drag.end();
        }
    }

    // ── Selection ──────────────────────────────────────────────────

    /// Toggle one item. Returns whether it is now selected.
    pub fn toggle_selected(&mut self, id: ItemId) -> AppResult<bool> {
        self.store.require(id)?;
        Ok(self.selection.toggle(id))
    }

    /// Select every visible item, or clear when all are selected.
    pub fn select_all_visible(&mut self) {
        let visible: Vec<ItemId> = self.visible_items().iter().map(|item| item.id).collect();
        self.selection.select_all(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected ids in store order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.store
            .items()
            .filter(|item| self.selection.contains(item.id))
            .map(|item| item.id)
            .collect()
    }

    /// Counts for a bulk confirmation prompt.
    pub fn bulk_summary(&self) -> BulkSummary {
        bulk::summarize(&self.store, &self.selected_ids())
    }

    /// Move every selected item under `target`, then clear the selection.
    pub fn bulk_move(&mut self, target: Option<ItemId>) -> AppResult<BulkReport> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return Err(AppError::validation("No items selected"));
        }

        let report = bulk::move_all(&mut self.store, &ids, target);
        self.selection.clear();
        info!(
            moved = report.succeeded.len(),
            unchanged = report.unchanged.len(),
            failed = report.failed.len(),
            ?target,
            "Bulk move finished"
        );
        Ok(report)
    }

    /// Delete every selected item, then clear the selection.
    pub fn bulk_delete(&mut self) -> AppResult<BulkReport> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return Err(AppError::validation("No items selected"));
        }

        let report = bulk::delete_all(&mut self.store, &ids);
        self.selection.clear();
        self.after_removal();
        info!(
            deleted = report.succeeded.len(),
            removed = report.removed,
            failed = report.failed.len(),
            "Bulk delete finished"
        );
        Ok(report)
    }

    // ── Drag and drop ──────────────────────────────────────────────

    /// Start dragging an item.
    pub fn drag_start(&mut self, id: ItemId) -> AppResult<()> {
        self.store.require(id)?;
        self.drag.start(id);
        Ok(())
    }

    /// Pointer over `target` (None clears the hover).
    pub fn drag_over(&mut self, target: Option<ItemId>) {
        let item = target.and_then(|id| self.store.get(id));
        self.drag.hover(item);
    }

    /// Whether dropping on `target` (None is the root) is allowed.
    pub fn can_drop(&self, target: Option<ItemId>) -> bool {
        match target {
            None => self.drag.can_drop(None),
            Some(id) => self
                .store
                .get(id)
                .is_some_and(|item| self.drag.can_drop(Some(item))),
        }
    }

    /// Drop the dragged item on `target`. Drag state is reset either way.
    pub fn drop_on(&mut self, target: Option<ItemId>) -> AppResult<MoveOutcome> {
        let dragged = self.drag.dragged();
        self.drag.end();
        let Some(id) = dragged else {
            return Err(AppError::validation("Nothing is being dragged"));
        };
        self.move_item(id, target)
    }

    /// Abandon the drag.
    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    // ── Read-only views ────────────────────────────────────────────

    /// Preview a file.
    pub fn preview(&self, id: ItemId) -> AppResult<Preview> {
        let item = self.store.require(id)?;
        self.previews.preview(item)
    }

    /// Storage usage for the indicator.
    pub fn usage(&self) -> StorageUsage {
        StorageUsage::of(&self.store)
    }

    /// Folder tree for the sidebar.
    pub fn folder_tree(&self) -> FolderTree {
        self.store.folder_tree()
    }
}

#[cfg(test)]
mod tests {
    use bault_core::error::ErrorKind;

    use super::*;

    fn empty() -> Dashboard {
        let mut config = AppConfig::default();
        config.explorer.seed_sample_data = false;
        Dashboard::new(&config).unwrap()
    }

    #[test]
    fn test_new_seeds_by_default() {
        let dashboard = Dashboard::new(&AppConfig::default()).unwrap();
        assert_eq!(dashboard.store().len(), 10);
        assert_eq!(dashboard.visible_items().len(), 4);
    }

    #[test]
    fn test_create_folder_in_current_folder() {
        let mut dashboard = empty();
        let parent = dashboard.create_folder("Parent").unwrap();
        dashboard.open(Some(parent.id)).unwrap();
        let child = dashboard.create_folder("  Child ").unwrap();

        assert_eq!(child.parent_id, Some(parent.id));
        assert_eq!(child.name, "Child");
        assert!(dashboard.create_folder("   ").is_err());
    }

    #[test]
    fn test_delete_current_folder_falls_back_to_root() {
        let mut dashboard = empty();
        let folder = dashboard.create_folder("Gone").unwrap();
        dashboard.open(Some(folder.id)).unwrap();
        let inner = dashboard.create_folder("Inner").unwrap();
        dashboard.toggle_selected(inner.id).unwrap();

        dashboard.delete(folder.id).unwrap();
        assert_eq!(dashboard.current_folder(), None);
        assert!(dashboard.selection().is_empty());
        assert!(!dashboard.selection().is_select_mode());
    }

    #[test]
    fn test_drop_resets_drag_even_on_error() {
        let mut dashboard = empty();
        let folder = dashboard.create_folder("A").unwrap();
        let sub = dashboard.create_folder("B").unwrap();
        dashboard.move_item(sub.id, Some(folder.id)).unwrap();

        dashboard.drag_start(folder.id).unwrap();
        assert!(dashboard.can_drop(None));
        assert!(!dashboard.can_drop(Some(folder.id)));
        // A descendant passes the pre-check; the store rejects it.
        assert!(dashboard.can_drop(Some(sub.id)));

        let err = dashboard.drop_on(Some(sub.id)).unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert!(!dashboard.drag().is_dragging());
    }

    #[test]
    fn test_drop_without_drag() {
        let mut dashboard = empty();
        assert!(!dashboard.can_drop(None));
        assert!(dashboard.drop_on(None).is_err());
    }

    #[test]
    fn test_bulk_requires_selection() {
        let mut dashboard = empty();
        assert!(dashboard.bulk_delete().is_err());
        assert!(dashboard.bulk_move(None).is_err());
    }

    #[test]
    fn test_preview_missing_item() {
        let dashboard = empty();
        let err = dashboard.preview(ItemId::new()).unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
