//! Sorting types for item listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// The attribute a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Lexicographic by name.
    #[default]
    Name,
    /// Folders before files, then by name.
    Type,
    /// Numeric by size; folders count as zero.
    Size,
    /// Numeric by modification timestamp; missing counts as zero.
    #[serde(alias = "modified")]
    LastModified,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Type => write!(f, "type"),
            Self::Size => write!(f, "size"),
            Self::LastModified => write!(f, "modified"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "size" => Ok(Self::Size),
            "modified" | "last_modified" | "lastmodified" | "date" => Ok(Self::LastModified),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

/// A sort specification consisting of a key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// Attribute to sort by.
    pub key: SortKey,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a new sort spec.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Create an ascending sort on the given key.
    pub fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Create a descending sort on the given key.
    pub fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Column-header toggle: the active key flips direction, a new key
    /// starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::asc(key)
        }
    }
}
