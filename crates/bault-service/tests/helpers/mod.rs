//! Shared test helpers for integration tests.

#![allow(dead_code)]

use bault_core::config::AppConfig;
use bault_core::types::ItemId;
use bault_entity::{CreateItem, Item};
use bault_service::{ContentSource, Dashboard, MemoryFile};
use bault_store::ItemStore;

/// Test dashboard context
pub struct TestDashboard {
    /// The dashboard under test
    pub dashboard: Dashboard,
    /// Configuration it was built from
    pub config: AppConfig,
}

impl TestDashboard {
    /// Create an empty dashboard from the test fixture config
    pub fn new() -> Self {
        let config =
            AppConfig::load("tests/fixtures/test_config.toml").expect("Failed to load test config");
        let dashboard = Dashboard::new(&config).expect("Failed to build dashboard");
        Self { dashboard, config }
    }

    /// Create a dashboard with sample data
    pub fn seeded() -> Self {
        let mut config =
            AppConfig::load("tests/fixtures/test_config.toml").expect("Failed to load test config");
        config.explorer.seed_sample_data = true;
        let dashboard = Dashboard::new(&config).expect("Failed to build dashboard");
        Self { dashboard, config }
    }

    /// Create a dashboard over a prepared store
    pub fn with_store(store: ItemStore) -> Self {
        let config =
            AppConfig::load("tests/fixtures/test_config.toml").expect("Failed to load test config");
        let dashboard = Dashboard::with_store(store, &config);
        Self { dashboard, config }
    }

    /// Folder under `parent`, bypassing navigation
    pub fn folder(&mut self, name: &str, parent: Option<ItemId>) -> ItemId {
        let folder = self.dashboard.create_folder(name).expect("create folder");
        if parent.is_some() {
            self.dashboard
                .move_item(folder.id, parent)
                .expect("move folder");
        }
        folder.id
    }

    /// Find an item by name
    pub fn by_name(&self, name: &str) -> &Item {
        self.dashboard
            .store()
            .items()
            .find(|item| item.name == name)
            .unwrap_or_else(|| panic!("no item named {name}"))
    }

    /// Names of the visible listing, in order
    pub fn visible_names(&self) -> Vec<String> {
        self.dashboard
            .visible_items()
            .iter()
            .map(|item| item.name.clone())
            .collect()
    }
}

/// Store with one file per name at the root
pub fn store_with_files(quota: u64, files: &[(&str, u64)]) -> ItemStore {
    let mut store = ItemStore::new(quota);
    for (name, size) in files {
        store
            .create(CreateItem::file(*name, None, *size))
            .expect("create file");
    }
    store
}

/// Boxed in-memory upload source
pub fn memory(name: &str, data: &str) -> Box<dyn ContentSource> {
    Box::new(MemoryFile::new(name, data.to_string()))
}
