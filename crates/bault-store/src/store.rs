//! The item arena and its mutations.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bault_core::types::ItemId;
use bault_entity::{CreateItem, Item, ItemKind, StorageQuota};

use crate::error::{StoreError, StoreResult};
use crate::hierarchy::{ancestors, children_index, descendant_closure};

/// Result of a successful [`ItemStore::move_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The parent reference was rewritten.
    Moved {
        /// Previous parent.
        from: Option<ItemId>,
        /// New parent.
        to: Option<ItemId>,
    },
    /// The item already lived under the target; nothing changed.
    Unchanged,
}

/// In-memory store of files and folders.
///
/// The store exclusively owns every record. Callers receive shared borrows
/// or clones, never mutable handles, so all invariants are checked here.
#[derive(Debug, Clone)]
pub struct ItemStore {
    /// Records keyed by id.
    items: HashMap<ItemId, Item>,
    /// Insertion order, used for every listing.
    order: Vec<ItemId>,
    /// Upper bound on total file bytes.
    quota_bytes: u64,
    /// Running sum of file sizes.
    used_bytes: u64,
}

impl ItemStore {
    /// Creates an empty store with the given quota.
    pub fn new(quota_bytes: u64) -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
            quota_bytes,
            used_bytes: 0,
        }
    }

    /// Builds a store from a snapshot of items in any order.
    pub fn from_items(quota_bytes: u64, items: Vec<Item>) -> StoreResult<Self> {
        let mut store = Self::new(quota_bytes);
        store.insert_batch(items)?;
        Ok(store)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up an item.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Looks up an item, failing with `NotFound`.
    pub fn require(&self, id: ItemId) -> StoreResult<&Item> {
        self.get(id).ok_or(StoreError::NotFound(id))
    }

    /// Whether an item with this id exists.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// All items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// All folders in insertion order.
    pub fn folders(&self) -> Vec<&Item> {
        self.items().filter(|item| item.is_folder()).collect()
    }

    /// Sum of all file sizes.
    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    /// The configured quota.
    pub fn quota_bytes(&self) -> u64 {
        self.quota_bytes
    }

    /// Quota snapshot.
    pub fn quota(&self) -> StorageQuota {
        StorageQuota::new(self.quota_bytes, self.used_bytes)
    }

    /// Items whose parent is `parent_id` (None lists the root).
    pub fn list_children(&self, parent_id: Option<ItemId>) -> Vec<&Item> {
        self.items()
            .filter(|item| item.parent_id == parent_id)
            .collect()
    }

    /// Folders from the root down to `folder_id`, inclusive.
    ///
    /// Fails with `BrokenReference` on a dangling parent instead of silently
    /// truncating the path.
    pub fn ancestry_path(&self, folder_id: ItemId) -> StoreResult<Vec<&Item>> {
        let folder = self.require(folder_id)?;
        if !folder.is_folder() {
            return Err(StoreError::InvalidTarget(folder_id));
        }

        let mut path = vec![folder];
        for ancestor in ancestors(|id| self.get(id), folder, self.len()) {
            path.push(ancestor?);
        }
        path.reverse();
        Ok(path)
    }

    /// Every id transitively below `id`, excluding `id` itself.
    pub fn descendants(&self, id: ItemId) -> StoreResult<Vec<ItemId>> {
        let item = self.require(id)?;
        if !item.is_folder() {
            return Ok(Vec::new());
        }
        let index = children_index(self.items());
        Ok(descendant_closure(&index, id))
    }

    /// Whether `candidate` sits strictly below `ancestor_id`.
    pub fn is_descendant_of(&self, candidate: ItemId, ancestor_id: ItemId) -> StoreResult<bool> {
        let item = self.require(candidate)?;
        for ancestor in ancestors(|id| self.get(id), item, self.len()) {
            if ancestor?.id == ancestor_id {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Creates an item under a freshly generated id.
    pub fn create(&mut self, request: CreateItem) -> StoreResult<Item> {
        let item = request.into_item(ItemId::new(), Utc::now());
        self.insert(item.clone())?;
        Ok(item)
    }

    /// Creates several items, all or nothing.
    ///
    /// The aggregate size is checked against the quota before anything is
    /// written.
    pub fn create_batch(&mut self, requests: Vec<CreateItem>) -> StoreResult<Vec<Item>> {
        let now = Utc::now();
        let items: Vec<Item> = requests
            .into_iter()
            .map(|request| request.into_item(ItemId::new(), now))
            .collect();
        self.insert_batch(items.clone())?;
        Ok(items)
    }

    /// Inserts a fully formed item, keeping its id.
    pub fn insert(&mut self, item: Item) -> StoreResult<()> {
        self.insert_batch(vec![item])
    }

    /// Inserts fully formed items, all or nothing.
    ///
    /// Parents may be existing folders or folders elsewhere in the batch, in
    /// any order.
    pub fn insert_batch(&mut self, items: Vec<Item>) -> StoreResult<()> {
        self.validate_batch(&items)?;

        for item in items {
            debug!(item_id = %item.id, name = %item.name, kind = %item.kind, "Item inserted");
            self.used_bytes += item.size_or_zero();
            self.order.push(item.id);
            self.items.insert(item.id, item);
        }

        Ok(())
    }

    /// Renames an item and refreshes its timestamp.
    pub fn rename(&mut self, id: ItemId, new_name: &str) -> StoreResult<Item> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let item = self.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.name = name.to_string();
        item.last_modified = Utc::now();

        debug!(item_id = %id, name = %name, "Item renamed");
        Ok(item.clone())
    }

    /// Reparents an item.
    ///
    /// Only the moved record changes; its descendants keep pointing at it and
    /// travel with it.
    pub fn move_item(&mut self, id: ItemId, target: Option<ItemId>) -> StoreResult<MoveOutcome> {
        let item = self.require(id)?;
        let from = item.parent_id;

        if from == target {
            return Ok(MoveOutcome::Unchanged);
        }

        if let Some(target_id) = target {
            if item.is_folder() && (target_id == id || self.is_target_below(target_id, id)?) {
                return Err(StoreError::CyclicMove { id, target: target_id });
            }
            if !self.require(target_id)?.is_folder() {
                return Err(StoreError::InvalidTarget(target_id));
            }
        }

        let item = self.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.parent_id = target;
        item.last_modified = Utc::now();

        debug!(item_id = %id, from = ?from, to = ?target, "Item moved");
        Ok(MoveOutcome::Moved { from, to: target })
    }

    /// Deletes an item and, for folders, everything below it.
    ///
    /// Returns the removed records, the target first.
    pub fn delete(&mut self, id: ItemId) -> StoreResult<Vec<Item>> {
        let mut doomed = vec![id];
        doomed.extend(self.descendants(id)?);

        let doomed_set: HashSet<ItemId> = doomed.iter().copied().collect();
        self.order.retain(|existing| !doomed_set.contains(existing));

        let removed: Vec<Item> = doomed
            .into_iter()
            .filter_map(|doomed_id| self.items.remove(&doomed_id))
            .collect();
        let freed: u64 = removed.iter().map(Item::size_or_zero).sum();
        self.used_bytes = self.used_bytes.saturating_sub(freed);

        debug!(item_id = %id, removed = removed.len(), freed, "Item deleted");
        Ok(removed)
    }

    /// Checks ids, shapes, parents, quota, and acyclicity of a batch.
    fn validate_batch(&self, items: &[Item]) -> StoreResult<()> {
        let batch: HashMap<ItemId, &Item> = items.iter().map(|item| (item.id, item)).collect();
        if batch.len() != items.len() {
            let mut seen = HashSet::new();
            if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
                return Err(StoreError::DuplicateId(dup.id));
            }
        }

        let lookup = |id: ItemId| self.items.get(&id).or_else(|| batch.get(&id).copied());
        let mut requested: u64 = 0;

        for item in items {
            if self.contains(item.id) {
                return Err(StoreError::DuplicateId(item.id));
            }
            validate_shape(item)?;

            if let Some(parent_id) = item.parent_id {
                let parent = lookup(parent_id).ok_or(StoreError::NotFound(parent_id))?;
                if !parent.is_folder() {
                    return Err(StoreError::InvalidTarget(parent_id));
                }
            }

            requested = requested.saturating_add(item.size_or_zero());
        }

        if self.quota().would_exceed(requested) {
            return Err(StoreError::QuotaExceeded {
                requested,
                used: self.used_bytes,
                quota: self.quota_bytes,
            });
        }

        // Committed items never point into a batch, so only batch members can
        // close a loop.
        let limit = self.len() + items.len();
        for item in items {
            for ancestor in ancestors(&lookup, item, limit) {
                ancestor?;
            }
        }

        Ok(())
    }

    /// Whether `target_id` is strictly below `id`. Fails with `NotFound` when
    /// the target does not exist.
    fn is_target_below(&self, target_id: ItemId, id: ItemId) -> StoreResult<bool> {
        if !self.contains(target_id) {
            return Err(StoreError::NotFound(target_id));
        }
        self.is_descendant_of(target_id, id)
    }
}

/// Files carry a size; folders carry neither size nor content.
fn validate_shape(item: &Item) -> StoreResult<()> {
    if item.name.trim().is_empty() {
        return Err(StoreError::InvalidName);
    }
    match item.kind {
        ItemKind::Folder if item.size.is_some() => Err(StoreError::MalformedItem {
            id: item.id,
            reason: "folders cannot have a size",
        }),
        ItemKind::Folder if item.content.is_some() => Err(StoreError::MalformedItem {
            id: item.id,
            reason: "folders cannot have content",
        }),
        ItemKind::File if item.size.is_none() => Err(StoreError::MalformedItem {
            id: item.id,
            reason: "files must have a size",
        }),
        _ => Ok(()),
    }
}
