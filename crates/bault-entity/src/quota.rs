//! Storage quota value object.

use serde::{Deserialize, Serialize};

/// Coarse fill level of the quota, used to colour the storage indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    /// Below 50%.
    Low,
    /// Below 80%.
    Moderate,
    /// 80% and above.
    High,
}

/// Quota information for the item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageQuota {
    /// Total quota in bytes.
    pub total_bytes: u64,
    /// Currently used bytes (sum of all file sizes).
    pub used_bytes: u64,
}

impl StorageQuota {
    /// Create a quota from total and used values.
    pub fn new(total_bytes: u64, used_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
        }
    }

    /// Bytes still available, never negative.
    pub fn available_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.used_bytes)
    }

    /// Usage percentage (0.0 - 100.0, may exceed 100 for an over-full store).
    pub fn usage_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            0.0
        } else {
            (self.used_bytes as f64 / self.total_bytes as f64) * 100.0
        }
    }

    /// Check if the quota is exhausted.
    pub fn is_exceeded(&self) -> bool {
        self.used_bytes >= self.total_bytes
    }

    /// Check if adding the given number of bytes would exceed the quota.
    pub fn would_exceed(&self, additional_bytes: u64) -> bool {
        self.used_bytes.saturating_add(additional_bytes) > self.total_bytes
    }

    /// Fill level for display.
    pub fn level(&self) -> UsageLevel {
        let percent = self.usage_percent();
        if percent < 50.0 {
            UsageLevel::Low
        } else if percent < 80.0 {
            UsageLevel::Moderate
        } else {
            UsageLevel::High
        }
    }
}
