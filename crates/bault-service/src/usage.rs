//! Storage usage reporting.

use serde::Serialize;

use bault_entity::UsageLevel;
use bault_store::ItemStore;

/// Storage usage statistics for the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageUsage {
    /// Total used bytes.
    pub used_bytes: u64,
    /// Quota in bytes.
    pub quota_bytes: u64,
    /// Remaining bytes.
    pub available_bytes: u64,
    /// Usage percentage.
    pub usage_percent: f64,
    /// Fill level.
    pub level: UsageLevel,
    /// Number of files.
    pub file_count: usize,
    /// Number of folders.
    pub folder_count: usize,
}

impl StorageUsage {
    /// Gathers usage from a store.
    pub fn of(store: &ItemStore) -> Self {
        let quota = store.quota();
        let folder_count = store.items().filter(|item| item.is_folder()).count();

        Self {
            used_bytes: quota.used_bytes,
            quota_bytes: quota.total_bytes,
            available_bytes: quota.available_bytes(),
            usage_percent: quota.usage_percent(),
            level: quota.level(),
            file_count: store.len() - folder_count,
            folder_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use bault_entity::CreateItem;

    use super::*;

    #[test]
    fn test_usage_of_store() {
        let mut store = ItemStore::new(100);
        store.create(CreateItem::folder("d", None)).unwrap();
        store.create(CreateItem::file("a", None, 60)).unwrap();

        let usage = StorageUsage::of(&store);
        assert_eq!(usage.used_bytes, 60);
        assert_eq!(usage.available_bytes, 40);
        assert_eq!(usage.level, UsageLevel::Moderate);
        assert_eq!(usage.file_count, 1);
        assert_eq!(usage.folder_count, 1);
    }
}
