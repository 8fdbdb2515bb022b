//! Drag-and-drop pointer state.

use bault_core::types::ItemId;
use bault_entity::Item;

/// Which item is being dragged and which folder it hovers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    dragged: Option<ItemId>,
    hover: Option<ItemId>,
}

impl DragState {
    /// Begin dragging an item.
    pub fn start(&mut self, id: ItemId) {
        self.dragged = Some(id);
        self.hover = None;
    }

    /// Record the item under the pointer. Only folders are drop targets.
    pub fn hover(&mut self, target: Option<&Item>) {
        self.hover = target.filter(|item| item.is_folder()).map(|item| item.id);
    }

    /// Reset to idle.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// The dragged item, if any.
    pub fn dragged(&self) -> Option<ItemId> {
        self.dragged
    }

    /// The hovered folder, if any.
    pub fn hovered(&self) -> Option<ItemId> {
        self.hover
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Quick pre-check for a drop on `target` (None is the root).
    ///
    /// Cycles are not detected here; the store rejects them on move.
    pub fn can_drop(&self, target: Option<&Item>) -> bool {
        let Some(dragged) = self.dragged else {
            return false;
        };
        match target {
            None => true,
            Some(item) => item.id != dragged && item.is_folder(),
        }
    }
}
