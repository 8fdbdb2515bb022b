//! Explorer view state: where the user is and how the listing is shaped.

use serde::{Deserialize, Serialize};

use bault_core::config::explorer::ExplorerConfig;
use bault_core::error::AppError;
use bault_core::result::AppResult;
use bault_core::types::{ItemId, SortKey, SortSpec};
use bault_entity::{Category, Item};
use bault_store::{ItemStore, filter_by_category, search_and_sort};

/// Current folder, active category, search query, and sort order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerState {
    current_folder: Option<ItemId>,
    category: Option<Category>,
    query: String,
    sort: SortSpec,
}

impl ExplorerState {
    /// Initial state from configuration.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self {
            sort: SortSpec::new(config.default_sort, config.default_direction),
            ..Self::default()
        }
    }

    /// The folder being viewed (None for root).
    pub fn current_folder(&self) -> Option<ItemId> {
        self.current_folder
    }

    /// The active category filter.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// The search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The sort order.
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Enter a folder, or the root with `None`.
    pub fn open(&mut self, store: &ItemStore, folder_id: Option<ItemId>) -> AppResult<()> {
        if let Some(id) = folder_id {
            let item = store.require(id)?;
            if !item.is_folder() {
                return Err(AppError::validation(format!("'{}' is not a folder", item.name)));
            }
        }
        self.current_folder = folder_id;
        Ok(())
    }

    /// Go to the parent of the current folder. No-op at root.
    pub fn go_up(&mut self, store: &ItemStore) {
        self.current_folder = self
            .current_folder
            .and_then(|id| store.get(id))
            .and_then(|folder| folder.parent_id);
    }

    /// Folders from the root to the current folder; empty at root.
    pub fn breadcrumbs<'a>(&self, store: &'a ItemStore) -> AppResult<Vec<&'a Item>> {
        match self.current_folder {
            Some(id) => Ok(store.ancestry_path(id)?),
            None => Ok(Vec::new()),
        }
    }

    /// Select a category; selecting the active one clears the filter.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    /// Set or clear the category filter.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Column-header sort toggle.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    /// Replace the sort order.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Children of the current folder after category filter, search, and
    /// sort.
    pub fn visible<'a>(&self, store: &'a ItemStore) -> Vec<&'a Item> {
        let children = store.list_children(self.current_folder);
        let filtered = filter_by_category(children, self.category);
        search_and_sort(filtered, &self.query, self.sort)
    }

    /// Children of the current folder, before any filter (for category
    /// badges).
    pub fn unfiltered<'a>(&self, store: &'a ItemStore) -> Vec<&'a Item> {
        store.list_children(self.current_folder)
    }

    /// Fall back to the root if the current folder no longer exists.
    pub fn reconcile(&mut self, store: &ItemStore) {
        if self.current_folder.is_some_and(|id| !store.contains(id)) {
            self.current_folder = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use bault_core::types::SortDirection;
    use bault_entity::CreateItem;

    use super::*;

    fn fixture() -> (ItemStore, ItemId, ItemId) {
        let mut store = ItemStore::new(10_000);
        let docs = store.create(CreateItem::folder("Docs", None)).unwrap().id;
        let nested = store.create(CreateItem::folder("Nested", Some(docs))).unwrap().id;
        store.create(CreateItem::file("b.png", Some(docs), 20)).unwrap();
        store.create(CreateItem::file("a.txt", Some(docs), 10)).unwrap();
        (store, docs, nested)
    }

    #[test]
    fn test_open_rejects_files() {
        let (store, docs, _) = fixture();
        let file = store.list_children(Some(docs))[1].id;
        let mut state = ExplorerState::default();
        assert!(state.open(&store, Some(file)).is_err());
        assert_eq!(state.current_folder(), None);
    }

    #[test]
    fn test_visible_applies_filter_search_and_sort() {
        let (store, docs, _) = fixture();
        let mut state = ExplorerState::default();
        state.open(&store, Some(docs)).unwrap();

        let names: Vec<&str> = state.visible(&store).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.png", "Nested"]);

        state.toggle_sort(SortKey::Type);
        let names: Vec<&str> = state.visible(&store).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Nested", "a.txt", "b.png"]);

        state.toggle_category(Category::Images);
        let names: Vec<&str> = state.visible(&store).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b.png"]);

        state.toggle_category(Category::Images);
        state.set_query("NEST");
        assert_eq!(state.visible(&store).len(), 1);
    }

    #[test]
    fn test_breadcrumbs_and_go_up() {
        let (store, docs, nested) = fixture();
        let mut state = ExplorerState::default();
        assert!(state.breadcrumbs(&store).unwrap().is_empty());

        state.open(&store, Some(nested)).unwrap();
        let crumbs: Vec<ItemId> = state.breadcrumbs(&store).unwrap().iter().map(|i| i.id).collect();
        assert_eq!(crumbs, vec![docs, nested]);

        state.go_up(&store);
        assert_eq!(state.current_folder(), Some(docs));
        state.go_up(&store);
        assert_eq!(state.current_folder(), None);
    }

    #[test]
    fn test_reconcile_after_delete() {
        let (mut store, docs, nested) = fixture();
        let mut state = ExplorerState::default();
        state.open(&store, Some(nested)).unwrap();
        store.delete(docs).unwrap();
        state.reconcile(&store);
        assert_eq!(state.current_folder(), None);
    }

    #[test]
    fn test_from_config_uses_default_sort() {
        let config = ExplorerConfig {
            default_sort: SortKey::Size,
            default_direction: SortDirection::Desc,
            seed_sample_data: false,
        };
        let state = ExplorerState::from_config(&config);
        assert_eq!(state.sort(), SortSpec::desc(SortKey::Size));
    }
}
