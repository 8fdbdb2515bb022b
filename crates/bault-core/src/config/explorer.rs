//! Explorer view defaults.

use serde::{Deserialize, Serialize};

use crate::types::{SortDirection, SortKey};

/// Initial state of the explorer view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Sort key applied when a session starts.
    #[serde(default)]
    pub default_sort: SortKey,
    /// Sort direction applied when a session starts.
    #[serde(default)]
    pub default_direction: SortDirection,
    /// Whether a new session is populated with the sample tree.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            default_direction: SortDirection::default(),
            seed_sample_data: true,
        }
    }
}

fn default_true() -> bool {
    true
}
