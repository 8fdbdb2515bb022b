//! Integration tests for dashboard flows.

mod helpers;

use bault_core::error::ErrorKind;
use bault_core::types::{SortDirection, SortKey};
use bault_entity::{Category, CreateItem};
use bault_service::{LocalFile, Preview, UnavailableReason};
use bault_store::{ItemStore, MoveOutcome, filter_by_category};

#[test]
fn test_delete_then_move_into_deleted_folder() {
    let mut app = helpers::TestDashboard::new();
    let docs = app.folder("Docs", None);
    let mut store = app.dashboard.store().clone();
    store
        .create(CreateItem::file("a.txt", Some(docs), 10))
        .unwrap();
    let png = store.create(CreateItem::file("b.png", None, 20)).unwrap().id;
    let mut app = helpers::TestDashboard::with_store(store);

    let removed = app.dashboard.delete(docs).unwrap();
    assert_eq!(removed.len(), 2);
    assert_eq!(app.dashboard.store().len(), 1);

    let images = filter_by_category(app.dashboard.store().items(), Some(Category::Images));
    let names: Vec<&str> = images.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["b.png"]);

    let err = app.dashboard.move_item(png, Some(docs)).unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[test]
fn test_oversized_file_is_rejected() {
    let mut store = ItemStore::new(20 * 1024 * 1024);
    let err = store
        .create(CreateItem::file("x", None, 20 * 1024 * 1024 + 1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::QuotaExceeded);
    assert!(store.is_empty());
    assert_eq!(store.used_bytes(), 0);
}

#[tokio::test]
async fn test_upload_rejects_whole_batch_over_quota() {
    let store = helpers::store_with_files(100, &[("big.bin", 90)]);
    let mut app = helpers::TestDashboard::with_store(store);

    let err = app
        .dashboard
        .upload(vec![
            helpers::memory("a.txt", "hello"),
            helpers::memory("b.txt", "world, again"),
        ])
        .await
        .unwrap_err();

    assert!(err.is(ErrorKind::QuotaExceeded));
    assert_eq!(app.dashboard.store().len(), 1);
    assert_eq!(app.dashboard.usage().used_bytes, 90);
}

#[tokio::test]
async fn test_upload_local_files_into_current_folder() {
    let dir = tempfile::tempdir().unwrap();
    let text_path = dir.path().join("notes.md");
    let image_path = dir.path().join("photo.png");
    tokio::fs::write(&text_path, "# Notes\n\n- one\n").await.unwrap();
    tokio::fs::write(&image_path, [0x89u8, b'P', b'N', b'G', 0xff, 0x00])
        .await
        .unwrap();

    let mut app = helpers::TestDashboard::new();
    let target = app.folder("Inbox", None);
    app.dashboard.open(Some(target)).unwrap();

    let sources: Vec<Box<dyn bault_service::ContentSource>> = vec![
        Box::new(LocalFile::open(&text_path).await.unwrap()),
        Box::new(LocalFile::open(&image_path).await.unwrap()),
    ];
    let items = app.dashboard.upload(sources).await.unwrap();

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.parent_id == Some(target)));
    assert_eq!(app.visible_names(), ["notes.md", "photo.png"]);
    assert_eq!(app.dashboard.usage().used_bytes, 15 + 6);

    let notes = app.by_name("notes.md").id;
    let preview = app.dashboard.preview(notes).unwrap();
    let text = preview.as_text().unwrap();
    assert_eq!(text.language, "markdown");
    assert_eq!(text.content, "# Notes\n\n- one\n");

    let photo = app.by_name("photo.png").id;
    assert_eq!(
        app.dashboard.preview(photo).unwrap(),
        Preview::Unavailable {
            name: "photo.png".into(),
            reason: UnavailableReason::Binary,
        }
    );
}

#[test]
fn test_move_and_move_back_restores_parent() {
    let mut app = helpers::TestDashboard::new();
    let a = app.folder("A", None);
    let b = app.folder("B", None);
    let c = app.folder("C", Some(a));

    let outcome = app.dashboard.move_item(c, Some(b)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: Some(a),
            to: Some(b),
        }
    );
    app.dashboard.move_item(c, Some(a)).unwrap();
    assert_eq!(app.dashboard.store().get(c).unwrap().parent_id, Some(a));

    assert_eq!(
        app.dashboard.move_item(c, Some(a)).unwrap(),
        MoveOutcome::Unchanged
    );
}

#[test]
fn test_cyclic_moves_are_rejected() {
    let mut app = helpers::TestDashboard::new();
    let a = app.folder("A", None);
    let b = app.folder("B", Some(a));
    let c = app.folder("C", Some(b));

    for target in [a, b, c] {
        let err = app.dashboard.move_item(a, Some(target)).unwrap_err();
        assert!(err.is(ErrorKind::Validation));
    }
    assert_eq!(app.dashboard.store().get(a).unwrap().parent_id, None);
}

#[test]
fn test_navigation_and_breadcrumbs() {
    let mut app = helpers::TestDashboard::new();
    let a = app.folder("A", None);
    let b = app.folder("B", Some(a));

    app.dashboard.open(Some(b)).unwrap();
    let crumbs: Vec<&str> = app
        .dashboard
        .breadcrumbs()
        .unwrap()
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(crumbs, ["A", "B"]);

    app.dashboard.go_up();
    assert_eq!(app.dashboard.current_folder(), Some(a));
    app.dashboard.go_up();
    assert_eq!(app.dashboard.current_folder(), None);
    assert!(app.dashboard.breadcrumbs().unwrap().is_empty());
}

#[test]
fn test_search_sort_and_filter_on_seed_data() {
    let mut app = helpers::TestDashboard::seeded();
    let code = app.by_name("Code").id;
    app.dashboard.open(Some(code)).unwrap();

    assert_eq!(
        app.visible_names(),
        ["component.tsx", "styles.css", "utils.py"]
    );

    app.dashboard.toggle_sort(SortKey::Size);
    assert_eq!(app.dashboard.explorer().sort().direction, SortDirection::Asc);
    assert_eq!(
        app.visible_names(),
        ["styles.css", "utils.py", "component.tsx"]
    );

    app.dashboard.toggle_sort(SortKey::Size);
    assert_eq!(
        app.visible_names(),
        ["component.tsx", "utils.py", "styles.css"]
    );

    app.dashboard.toggle_category(Category::Code);
    assert_eq!(app.visible_names(), ["component.tsx", "utils.py"]);
    app.dashboard.set_query("UTIL");
    assert_eq!(app.visible_names(), ["utils.py"]);

    app.dashboard.toggle_category(Category::Code);
    app.dashboard.set_query("");
    assert_eq!(app.visible_names().len(), 3);
}

#[test]
fn test_category_counts_cover_current_folder() {
    let app = helpers::TestDashboard::seeded();
    let counts = app.dashboard.category_counts();
    let folders = counts
        .iter()
        .find(|(category, _)| *category == Category::Folders)
        .map(|(_, n)| *n);
    assert_eq!(folders, Some(3));
}

#[test]
fn test_bulk_delete_of_nested_selection() {
    let mut app = helpers::TestDashboard::seeded();
    let documents = app.by_name("Documents").id;
    let notes = app.by_name("My Notes").id;
    let config = app.by_name("config.json").id;

    app.dashboard.toggle_selected(notes).unwrap();
    app.dashboard.toggle_selected(documents).unwrap();
    app.dashboard.toggle_selected(config).unwrap();
    let summary = app.dashboard.bulk_summary();
    assert_eq!(summary.folders, 2);
    assert_eq!(summary.files, 1);
    assert_eq!(summary.total_bytes, 1024);

    let report = app.dashboard.bulk_delete().unwrap();
    assert_eq!(report.succeeded, vec![documents, config]);
    assert_eq!(report.skipped, vec![notes]);
    assert_eq!(report.removed, 4);
    assert!(app.dashboard.selection().is_empty());
    assert_eq!(app.dashboard.store().len(), 6);
    assert_eq!(app.dashboard.usage().used_bytes, 1_024_000 + 2048 + 1536 + 1024);
}

#[test]
fn test_bulk_move_into_folder() {
    let mut app = helpers::TestDashboard::seeded();
    let pictures = app.by_name("Pictures").id;
    let code = app.by_name("Code").id;
    let config = app.by_name("config.json").id;

    app.dashboard.toggle_selected(code).unwrap();
    app.dashboard.toggle_selected(config).unwrap();
    app.dashboard.toggle_selected(pictures).unwrap();

    let report = app.dashboard.bulk_move(Some(pictures)).unwrap();
    assert_eq!(report.succeeded, vec![code, config]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, pictures);
    assert!(app.dashboard.selection().is_empty());

    let tree = app.dashboard.folder_tree();
    let names: Vec<&str> = tree.roots.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Documents", "Pictures"]);
}

#[test]
fn test_select_all_toggles() {
    let mut app = helpers::TestDashboard::seeded();
    app.dashboard.select_all_visible();
    assert_eq!(app.dashboard.selection().len(), 4);
    assert!(app.dashboard.selection().is_select_mode());

    app.dashboard.select_all_visible();
    assert!(app.dashboard.selection().is_empty());
    assert!(!app.dashboard.selection().is_select_mode());
}

#[test]
fn test_drag_and_drop_moves_item() {
    let mut app = helpers::TestDashboard::seeded();
    let pictures = app.by_name("Pictures").id;
    let config = app.by_name("config.json").id;

    app.dashboard.drag_start(config).unwrap();
    app.dashboard.drag_over(Some(config));
    assert_eq!(app.dashboard.drag().hovered(), None);
    app.dashboard.drag_over(Some(pictures));
    assert_eq!(app.dashboard.drag().hovered(), Some(pictures));
    assert!(!app.dashboard.can_drop(Some(config)));
    assert!(app.dashboard.can_drop(Some(pictures)));

    let outcome = app.dashboard.drop_on(Some(pictures)).unwrap();
    assert!(matches!(outcome, MoveOutcome::Moved { .. }));
    assert!(!app.dashboard.drag().is_dragging());
    assert_eq!(
        app.dashboard.store().get(config).unwrap().parent_id,
        Some(pictures)
    );
}
