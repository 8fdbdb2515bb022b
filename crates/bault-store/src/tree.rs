//! Folder tree building for the sidebar.

use std::collections::HashMap;

use bault_core::types::ItemId;
use bault_entity::{FolderNode, FolderTree, Item};

use crate::store::ItemStore;

impl ItemStore {
    /// Builds the nested folder tree from the flat collection.
    pub fn folder_tree(&self) -> FolderTree {
        let mut folders_by_parent: HashMap<Option<ItemId>, Vec<&Item>> = HashMap::new();
        let mut file_counts: HashMap<Option<ItemId>, u64> = HashMap::new();

        for item in self.items() {
            if item.is_folder() {
                folders_by_parent.entry(item.parent_id).or_default().push(item);
            } else {
                *file_counts.entry(item.parent_id).or_default() += 1;
            }
        }

        let roots: Vec<FolderNode> = folders_by_parent
            .get(&None)
            .into_iter()
            .flatten()
            .map(|folder| build_node(folder, 0, &folders_by_parent, &file_counts))
            .collect();

        FolderTree {
            total_folders: self.items().filter(|item| item.is_folder()).count() as u64,
            root_file_count: file_counts.get(&None).copied().unwrap_or(0),
            roots,
        }
    }
}

fn build_node(
    folder: &Item,
    depth: usize,
    folders_by_parent: &HashMap<Option<ItemId>, Vec<&Item>>,
    file_counts: &HashMap<Option<ItemId>, u64>,
) -> FolderNode {
    let children = folders_by_parent
        .get(&Some(folder.id))
        .into_iter()
        .flatten()
        .map(|child| build_node(child, depth + 1, folders_by_parent, file_counts))
        .collect();

    FolderNode {
        id: folder.id,
        name: folder.name.clone(),
        depth,
        file_count: file_counts.get(&Some(folder.id)).copied().unwrap_or(0),
        children,
    }
}
