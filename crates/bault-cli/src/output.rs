//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use bault_entity::Item;
use bault_entity::content::format_size;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// Listing row for one item
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    /// Selection marker
    #[tabled(rename = " ")]
    #[serde(skip)]
    pub marker: &'static str,
    /// Short item ID
    pub id: String,
    /// Name
    pub name: String,
    /// File or folder
    pub kind: String,
    /// Human-readable size
    pub size: String,
    /// Last modified
    pub modified: String,
}

impl ItemRow {
    /// Build a row; `selected` sets the marker.
    pub fn new(item: &Item, selected: bool) -> Self {
        Self {
            marker: if selected { "*" } else { "" },
            id: item.id.short(),
            name: if item.is_folder() {
                format!("{}/", item.name)
            } else {
                item.name.clone()
            },
            kind: item.kind.to_string(),
            size: item.size.map(format_size).unwrap_or_else(|| "-".to_string()),
            modified: item.last_modified.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single value as JSON
pub fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
