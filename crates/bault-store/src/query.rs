//! Pure filtering and ordering over borrowed items.

use std::cmp::Ordering;

use tracing::debug;

use bault_core::types::{SortDirection, SortKey, SortSpec};
use bault_entity::{Category, Item, ItemKind};

/// Keep the items belonging to `category`; `None` keeps everything.
pub fn filter_by_category<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    category: Option<Category>,
) -> Vec<&'a Item> {
    match category {
        Some(category) => items
            .into_iter()
            .filter(|item| category.matches(item))
            .collect(),
        None => items.into_iter().collect(),
    }
}

/// Keep items whose name contains `query` (case-insensitive), then order
/// them by `sort`.
///
/// The sort is stable in both directions: descending reverses the
/// comparator rather than the list, so equal keys keep their input order.
pub fn search_and_sort<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    query: &str,
    sort: SortSpec,
) -> Vec<&'a Item> {
    let needle = query.to_lowercase();
    let mut matched: Vec<&Item> = items
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect();

    matched.sort_by(|a, b| {
        let ordering = compare(a, b, sort.key);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    debug!(query, key = %sort.key, direction = %sort.direction, matched = matched.len(), "Items searched");
    matched
}

/// Ascending comparison of two items on one key.
pub fn compare(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(a, b),
        SortKey::Type => match (a.kind, b.kind) {
            (ItemKind::Folder, ItemKind::File) => Ordering::Less,
            (ItemKind::File, ItemKind::Folder) => Ordering::Greater,
            _ => compare_names(a, b),
        },
        SortKey::Size => a.size_or_zero().cmp(&b.size_or_zero()),
        SortKey::LastModified => a.last_modified.cmp(&b.last_modified),
    }
}

/// Case-insensitive name order; names differing only in case tie.
fn compare_names(a: &Item, b: &Item) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Number of items per category, in sidebar order.
pub fn category_counts<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<(Category, usize)> {
    let items: Vec<&Item> = items.into_iter().collect();
    Category::all()
        .map(|category| {
            let count = items.iter().filter(|item| category.matches(item)).count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use bault_core::types::ItemId;
    use bault_entity::CreateItem;

    use super::*;

    fn file(name: &str, size: u64, age_secs: i64) -> Item {
        CreateItem::file(name, None, size)
            .modified_at(Utc::now() - Duration::seconds(age_secs))
            .into_item(ItemId::new(), Utc::now())
    }

    fn folder(name: &str) -> Item {
        CreateItem::folder(name, None).into_item(ItemId::new(), Utc::now())
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn test_filter_none_keeps_everything() {
        let items = [file("a.png", 1, 0), folder("Docs")];
        assert_eq!(filter_by_category(&items, None).len(), 2);
    }

    #[test]
    fn test_filter_images() {
        let items = [file("a.png", 1, 0), file("b.txt", 1, 0), folder("Pictures")];
        let images = filter_by_category(&items, Some(Category::Images));
        assert_eq!(names(&images), vec!["a.png"]);
        let folders = filter_by_category(&items, Some(Category::Folders));
        assert_eq!(names(&folders), vec!["Pictures"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = [file("Report.docx", 1, 0), file("notes.txt", 1, 0), folder("REPORTS")];
        let found = search_and_sort(&items, "report", SortSpec::asc(SortKey::Name));
        assert_eq!(names(&found), vec!["Report.docx", "REPORTS"]);
        assert_eq!(search_and_sort(&items, "", SortSpec::default()).len(), 3);
    }

    #[test]
    fn test_sort_by_type_puts_folders_first() {
        let items = [file("a.txt", 1, 0), folder("z"), file("b.txt", 1, 0), folder("m")];
        let sorted = search_and_sort(&items, "", SortSpec::asc(SortKey::Type));
        assert_eq!(names(&sorted), vec!["m", "z", "a.txt", "b.txt"]);
        let sorted = search_and_sort(&items, "", SortSpec::desc(SortKey::Type));
        assert_eq!(names(&sorted), vec!["b.txt", "a.txt", "z", "m"]);
    }

    #[test]
    fn test_sort_by_size_treats_folders_as_zero() {
        let items = [file("big", 300, 0), folder("dir"), file("small", 5, 0)];
        let sorted = search_and_sort(&items, "", SortSpec::asc(SortKey::Size));
        assert_eq!(names(&sorted), vec!["dir", "small", "big"]);
    }

    #[test]
    fn test_sort_by_last_modified() {
        let items = [file("new", 1, 10), file("old", 1, 1000), file("mid", 1, 100)];
        let sorted = search_and_sort(&items, "", SortSpec::desc(SortKey::LastModified));
        assert_eq!(names(&sorted), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_is_stable_across_direction_toggles() {
        let items = [
            file("first", 7, 0),
            file("second", 7, 0),
            file("third", 7, 0),
        ];
        let spec = SortSpec::asc(SortKey::Size);

        let asc = search_and_sort(&items, "", spec);
        let desc = search_and_sort(asc.iter().copied(), "", spec.toggled(SortKey::Size));
        let again = search_and_sort(desc.iter().copied(), "", spec);
        assert_eq!(names(&asc), vec!["first", "second", "third"]);
        assert_eq!(names(&desc), vec!["first", "second", "third"]);
        assert_eq!(names(&again), names(&asc));
    }

    #[test]
    fn test_category_counts() {
        let items = [
            file("a.ts", 1, 0),
            file("b.rs", 1, 0),
            file("package.json", 1, 0),
            folder("src"),
        ];
        let counts = category_counts(&items);
        let get = |c: Category| counts.iter().find(|(k, _)| *k == c).map(|(_, n)| *n);
        assert_eq!(get(Category::Code), Some(2));
        assert_eq!(get(Category::Config), Some(1));
        assert_eq!(get(Category::Folders), Some(1));
        assert_eq!(get(Category::Images), Some(0));
    }
}
