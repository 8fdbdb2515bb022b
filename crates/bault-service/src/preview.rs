//! File preview.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bault_core::error::AppError;
use bault_core::result::AppResult;
use bault_entity::Item;
use bault_entity::content::{is_text_file, language_for};

/// Why a file has no text preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// Text-like file whose content was never captured.
    ContentMissing,
    /// Binary file.
    Binary,
}

/// Rendered text preview of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPreview {
    pub name: String,
    /// Highlighter language.
    pub language: &'static str,
    pub content: String,
    /// Newline-separated line count (an empty file has one line).
    pub line_count: usize,
    /// UTF-8 length of the content.
    pub byte_size: usize,
    /// Recorded file size.
    pub file_size: u64,
    pub last_modified: DateTime<Utc>,
}

/// Result of previewing a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "preview", rename_all = "snake_case")]
pub enum Preview {
    Text(TextPreview),
    Unavailable {
        name: String,
        reason: UnavailableReason,
    },
}

impl Preview {
    /// The text preview, if any.
    pub fn as_text(&self) -> Option<&TextPreview> {
        match self {
            Self::Text(text) => Some(text),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Builds previews for file items.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewService;

impl PreviewService {
    /// Creates a preview service.
    pub fn new() -> Self {
        Self
    }

    /// Preview a file. Folders are rejected.
    pub fn preview(&self, item: &Item) -> AppResult<Preview> {
        if item.is_folder() {
            return Err(AppError::validation(format!(
                "'{}' is a folder and cannot be previewed",
                item.name
            )));
        }

        let preview = match &item.content {
            Some(content) => Preview::Text(TextPreview {
                name: item.name.clone(),
                language: language_for(&item.name),
                content: content.clone(),
                line_count: content.split('\n').count(),
                byte_size: content.len(),
                file_size: item.size_or_zero(),
                last_modified: item.last_modified,
            }),
            None => Preview::Unavailable {
                name: item.name.clone(),
                reason: if is_text_file(&item.name) {
                    UnavailableReason::ContentMissing
                } else {
                    UnavailableReason::Binary
                },
            },
        };
        Ok(preview)
    }
}
