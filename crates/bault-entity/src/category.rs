//! Sidebar filter categories.
//!
//! Classification is table driven: each [`CategoryRule`] pairs a category
//! with an extension set and an optional name predicate, and
//! [`Category::matches`] consults the table once per item.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::extension_of;
use crate::item::{Item, ItemKind};

/// A named classification bucket used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Source code.
    Code,
    /// Stylesheets.
    Styles,
    /// Prose and office documents.
    Documents,
    /// Raster and vector images.
    Images,
    /// Configuration files.
    Config,
    /// Tabular and database files.
    Data,
    /// Folders only.
    Folders,
}

/// One row of the category table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// The category this row describes.
    pub category: Category,
    /// Human-readable title shown next to the filter.
    pub title: &'static str,
    /// Lower-cased extensions belonging to the category.
    pub extensions: &'static [&'static str],
    /// Extra match on the raw file name, regardless of extension.
    pub name_predicate: Option<fn(&str) -> bool>,
}

fn is_config_name(name: &str) -> bool {
    name.contains("config")
        || name.starts_with(".env")
        || name == "package.json"
        || name == "tsconfig.json"
}

const CODE: CategoryRule = CategoryRule {
    category: Category::Code,
    title: "Code Files",
    extensions: &[
        "js", "jsx", "ts", "tsx", "py", "java", "c", "cpp", "cs", "php", "rb", "go", "rs",
        "swift", "kt",
    ],
    name_predicate: None,
};

const STYLES: CategoryRule = CategoryRule {
    category: Category::Styles,
    title: "Stylesheets",
    extensions: &["css", "scss", "sass", "less"],
    name_predicate: None,
};

const DOCUMENTS: CategoryRule = CategoryRule {
    category: Category::Documents,
    title: "Documents",
    extensions: &["md", "txt", "pdf", "doc", "docx", "rtf"],
    name_predicate: None,
};

const IMAGES: CategoryRule = CategoryRule {
    category: Category::Images,
    title: "Images",
    extensions: &["jpg", "jpeg", "png", "gif", "svg", "webp", "bmp", "ico"],
    name_predicate: None,
};

const CONFIG: CategoryRule = CategoryRule {
    category: Category::Config,
    title: "Config Files",
    extensions: &["json", "yaml", "yml", "toml", "env", "ini", "conf", "config"],
    name_predicate: Some(is_config_name),
};

const DATA: CategoryRule = CategoryRule {
    category: Category::Data,
    title: "Data Files",
    extensions: &["csv", "sql", "db", "sqlite", "xml"],
    name_predicate: None,
};

const FOLDERS: CategoryRule = CategoryRule {
    category: Category::Folders,
    title: "Folders",
    extensions: &[],
    name_predicate: None,
};

/// The category table, in sidebar order.
pub const CATEGORY_RULES: &[CategoryRule] =
    &[CODE, STYLES, DOCUMENTS, IMAGES, CONFIG, DATA, FOLDERS];

impl Category {
    /// All categories in sidebar order.
    pub fn all() -> impl Iterator<Item = Category> {
        CATEGORY_RULES.iter().map(|rule| rule.category)
    }

    /// The table row for this category.
    pub fn rule(self) -> &'static CategoryRule {
        match self {
            Self::Code => &CODE,
            Self::Styles => &STYLES,
            Self::Documents => &DOCUMENTS,
            Self::Images => &IMAGES,
            Self::Config => &CONFIG,
            Self::Data => &DATA,
            Self::Folders => &FOLDERS,
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        self.rule().title
    }

    /// Whether the item belongs to this category.
    ///
    /// Folders only ever match [`Category::Folders`]; files never do.
    pub fn matches(self, item: &Item) -> bool {
        match item.kind {
            ItemKind::Folder => self == Category::Folders,
            ItemKind::File => {
                let rule = self.rule();
                let extension = extension_of(&item.name);
                rule.extensions.contains(&extension.as_str())
                    || rule.name_predicate.is_some_and(|pred| pred(&item.name))
            }
        }
    }

    /// Parse a filter selection. Unrecognized or empty input means "no
    /// filter".
    pub fn parse_filter(input: &str) -> Option<Category> {
        input.parse().ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::Code => "code",
            Self::Styles => "styles",
            Self::Documents => "documents",
            Self::Images => "images",
            Self::Config => "config",
            Self::Data => "data",
            Self::Folders => "folders",
        };
        write!(f, "{id}")
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .find(|category| category.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use bault_core::types::ItemId;
    use chrono::Utc;

    use super::*;
    use crate::item::CreateItem;

    fn file(name: &str) -> Item {
        CreateItem::file(name, None, 1).into_item(ItemId::new(), Utc::now())
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(Category::Images.matches(&file("HOLIDAY.PNG")));
        assert!(Category::Code.matches(&file("main.rs")));
        assert!(!Category::Code.matches(&file("main.rs.bak")));
    }

    #[test]
    fn test_config_name_exceptions() {
        assert!(Category::Config.matches(&file(".env.local")));
        assert!(Category::Config.matches(&file("webpack.config.js")));
        assert!(Category::Config.matches(&file("settings.toml")));
        assert!(!Category::Config.matches(&file("notes.txt")));
    }

    #[test]
    fn test_folders_only_match_folders_category() {
        let folder = CreateItem::folder("images.png", None).into_item(ItemId::new(), Utc::now());
        assert!(Category::Folders.matches(&folder));
        assert!(!Category::Images.matches(&folder));
        assert!(!Category::Folders.matches(&file("a.txt")));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(Category::parse_filter("Images"), Some(Category::Images));
        assert_eq!(Category::parse_filter("none"), None);
        assert_eq!(Category::parse_filter(""), None);
    }

    #[test]
    fn test_every_category_has_a_rule() {
        for category in [
            Category::Code,
            Category::Styles,
            Category::Documents,
            Category::Images,
            Category::Config,
            Category::Data,
            Category::Folders,
        ] {
            assert_eq!(category.rule().category, category);
        }
        assert_eq!(Category::all().count(), CATEGORY_RULES.len());
        assert_eq!(Category::Data.title(), "Data Files");
        assert!(Category::Data.matches(&file("orders.csv")));
        assert!(!Category::Folders.matches(&file("orders.csv")));
    }
}
