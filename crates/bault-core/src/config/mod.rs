//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file overlaid with `BAULT__`-prefixed environment variables.
//! Each sub-module represents a logical configuration section.

pub mod explorer;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::explorer::ExplorerConfig;
use self::logging::LoggingConfig;
use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Item storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Explorer view defaults.
    #[serde(default)]
    pub explorer: ExplorerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; a missing file yields the defaults. Environment
    /// variables such as `BAULT__STORAGE__QUOTA_BYTES` override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("BAULT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        debug!(
            path,
            quota_bytes = loaded.storage.quota_bytes,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::types::{SortDirection, SortKey};

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.storage.quota_bytes, 20 * 1024 * 1024);
        assert!(config.storage.read_text_content);
        assert_eq!(config.explorer.default_sort, SortKey::Name);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bault.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[storage]\nquota_bytes = 1024\n\n[explorer]\ndefault_sort = \"size\"\ndefault_direction = \"desc\"\nseed_sample_data = false\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.storage.quota_bytes, 1024);
        assert_eq!(config.explorer.default_sort, SortKey::Size);
        assert_eq!(config.explorer.default_direction, SortDirection::Desc);
        assert!(!config.explorer.seed_sample_data);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
