//! Parent-chain walks and descendant closures.
//!
//! Both helpers take a lookup closure rather than the store itself so the
//! same walk validates committed items and a not-yet-committed batch.

use std::collections::{HashMap, HashSet, VecDeque};
use std::marker::PhantomData;

use bault_core::types::ItemId;
use bault_entity::Item;

use crate::error::{StoreError, StoreResult};

/// Iterator over the ancestors of an item, nearest first.
///
/// Yields `Err` once and stops if a parent reference dangles, or if the walk
/// takes more steps than `limit` (which can only happen on a cycle).
pub struct Ancestors<'a, F>
where
    F: Fn(ItemId) -> Option<&'a Item>,
{
    lookup: F,
    origin: ItemId,
    child: ItemId,
    next: Option<ItemId>,
    remaining: usize,
    done: bool,
    _items: PhantomData<&'a Item>,
}

/// Walk from `item` towards the root.
pub fn ancestors<'a, F>(lookup: F, item: &'a Item, limit: usize) -> Ancestors<'a, F>
where
    F: Fn(ItemId) -> Option<&'a Item>,
{
    Ancestors {
        lookup,
        origin: item.id,
        child: item.id,
        next: item.parent_id,
        remaining: limit,
        done: false,
        _items: PhantomData,
    }
}

impl<'a, F> Iterator for Ancestors<'a, F>
where
    F: Fn(ItemId) -> Option<&'a Item>,
{
    type Item = StoreResult<&'a Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let parent_id = self.next?;

        if self.remaining == 0 {
            self.done = true;
            return Some(Err(StoreError::CycleDetected(self.origin)));
        }
        self.remaining -= 1;

        match (self.lookup)(parent_id) {
            Some(parent) => {
                self.child = parent.id;
                self.next = parent.parent_id;
                Some(Ok(parent))
            }
            None => {
                self.done = true;
                Some(Err(StoreError::BrokenReference {
                    item: self.child,
                    parent: parent_id,
                }))
            }
        }
    }
}

/// Map each parent id to the ids of its direct children.
pub fn children_index<'a>(items: impl IntoIterator<Item = &'a Item>) -> HashMap<ItemId, Vec<ItemId>> {
    let mut index: HashMap<ItemId, Vec<ItemId>> = HashMap::new();
    for item in items {
        if let Some(parent_id) = item.parent_id {
            index.entry(parent_id).or_default().push(item.id);
        }
    }
    index
}

/// Every id transitively below `root`, excluding `root` itself.
///
/// Order is breadth-first. A visited set guards against revisiting ids if the
/// index were ever malformed.
pub fn descendant_closure(index: &HashMap<ItemId, Vec<ItemId>>, root: ItemId) -> Vec<ItemId> {
    let mut closure = Vec::new();
    let mut seen = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);

    while let Some(current) = queue.pop_front() {
        for &child in index.get(&current).into_iter().flatten() {
            if seen.insert(child) {
                closure.push(child);
                queue.push_back(child);
            }
        }
    }

    closure
}
