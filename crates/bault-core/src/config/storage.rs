//! Item storage configuration.

use serde::{Deserialize, Serialize};

/// Default quota on total stored file bytes (20 MiB).
pub const DEFAULT_QUOTA_BYTES: u64 = 20 * 1024 * 1024;

/// Storage limits and upload behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Upper bound on the total size of all files, in bytes.
    #[serde(default = "default_quota")]
    pub quota_bytes: u64,
    /// Whether uploads of text-like files read their content for preview.
    #[serde(default = "default_true")]
    pub read_text_content: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            quota_bytes: default_quota(),
            read_text_content: true,
        }
    }
}

fn default_quota() -> u64 {
    DEFAULT_QUOTA_BYTES
}

fn default_true() -> bool {
    true
}
