//! Multi-item selection for bulk actions.

use std::collections::HashSet;

use bault_core::types::ItemId;

/// The set of selected items and whether select mode is on.
///
/// Select mode switches off whenever the selection becomes empty.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<ItemId>,
    select_mode: bool,
}

impl Selection {
    /// Add or remove one item. Returns whether it is now selected.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let selected = !self.ids.contains(&id);
        self.set(id, selected);
        selected
    }

    /// Explicitly select or deselect one item.
    pub fn set(&mut self, id: ItemId, selected: bool) {
        if selected {
            self.ids.insert(id);
            self.select_mode = true;
        } else {
            self.ids.remove(&id);
        }
        self.sync_mode();
    }

    /// Select every visible item, or clear if they are all selected already.
    pub fn select_all(&mut self, visible: &[ItemId]) {
        let all_selected = !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id));
        if all_selected || visible.is_empty() {
            self.clear();
        } else {
            self.ids = visible.iter().copied().collect();
            self.select_mode = true;
        }
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.select_mode = false;
    }

    /// Keep only ids for which `keep` holds.
    pub fn retain(&mut self, mut keep: impl FnMut(ItemId) -> bool) {
        self.ids.retain(|id| keep(*id));
        self.sync_mode();
    }

    /// Whether the item is selected.
    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether select mode is on.
    pub fn is_select_mode(&self) -> bool {
        self.select_mode
    }

    fn sync_mode(&mut self) {
        if self.ids.is_empty() {
            self.select_mode = false;
        }
    }
}
