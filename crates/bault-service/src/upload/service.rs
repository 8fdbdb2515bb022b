//! Turns content sources into file items.

use tracing::{info, warn};

use bault_core::config::storage::StorageConfig;
use bault_core::error::AppError;
use bault_core::result::AppResult;
use bault_core::types::ItemId;
use bault_entity::content::{format_size, is_text_file};
use bault_entity::{CreateItem, StorageQuota};

use super::source::ContentSource;

/// Prepares uploads: quota check, then content reads.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Storage configuration.
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Builds create requests for a batch of sources placed under `parent_id`.
    ///
    /// The whole batch is rejected before any content is read when its total
    /// size would overflow `quota`. A failed content read is not an error:
    /// the file is still created, just without text content.
    pub async fn prepare(
        &self,
        quota: StorageQuota,
        parent_id: Option<ItemId>,
        sources: &[Box<dyn ContentSource>],
    ) -> AppResult<Vec<CreateItem>> {
        let total: u64 = sources.iter().map(|source| source.size()).sum();
        if quota.would_exceed(total) {
            warn!(
                requested = total,
                used = quota.used_bytes,
                quota = quota.total_bytes,
                "Upload rejected: storage limit exceeded"
            );
            return Err(AppError::quota_exceeded(format!(
                "Cannot upload {} ({}): only {} of storage left",
                plural(sources.len()),
                format_size(total),
                format_size(quota.available_bytes()),
            )));
        }

        let mut requests = Vec::with_capacity(sources.len());
        for source in sources {
            let content = self.read_content(&**source).await;
            let mut request = CreateItem::file(source.name(), parent_id, source.size())
                .with_optional_content(content);
            if let Some(modified) = source.last_modified() {
                request = request.modified_at(modified);
            }
            requests.push(request);
        }

        info!(count = requests.len(), bytes = total, "Upload prepared");
        Ok(requests)
    }

    /// Reads text content when the name is text-like; degrades to `None`.
    async fn read_content(&self, source: &dyn ContentSource) -> Option<String> {
        if !self.config.read_text_content || !is_text_file(source.name()) {
            return None;
        }

        match source.read_text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(name = %source.name(), error = %e, "Could not read file content");
                None
            }
        }
    }
}

fn plural(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{count} files")
    }
}
