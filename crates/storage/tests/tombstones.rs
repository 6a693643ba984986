#![forbid(unsafe_code)]

//! Full-path removal rewrites `deleted_at_ms` on every historical row of the
//! subtree. These tests pin that retroactive behavior.

use mc_core::CatalogPath;
use mc_storage::{Catalog, DatabaseCatalog, SqliteStore};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn open_catalog() -> (tempfile::TempDir, DatabaseCatalog) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SqliteStore::open(dir.path()).expect("open store");
    (dir, DatabaseCatalog::new(Arc::new(store)))
}

fn now_ms() -> i64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    i64::try_from(now.as_millis()).expect("ms fits i64")
}

fn tick() {
    std::thread::sleep(Duration::from_millis(5));
}

#[test]
fn rm_hides_path_and_everything_beneath_it() {
    let (_dir, catalog) = open_catalog();
    catalog
        .write("/db/schemas/public/tables/users", "comment", json!("u"))
        .expect("write users");
    catalog
        .write("/db/schemas/public/views/active", "comment", json!("a"))
        .expect("write view");
    catalog.touch("/db/schemas/audit").expect("touch audit");

    catalog.rm("/db/schemas/public", None).expect("rm public");

    assert_eq!(catalog.read("/db/schemas/public", None).expect("read"), None);
    assert_eq!(
        catalog
            .read("/db/schemas/public/tables/users", None)
            .expect("read"),
        None
    );
    assert_eq!(
        catalog
            .read("/db/schemas/public/views/active", None)
            .expect("read"),
        None
    );
    assert_eq!(catalog.ls("/db/schemas/public", None).expect("ls"), None);
    assert_eq!(
        catalog.ls("/db/schemas", None).expect("ls"),
        Some(vec!["audit".to_string()])
    );
}

#[test]
fn rm_is_retroactive_for_earlier_as_of() {
    let (_dir, catalog) = open_catalog();
    let path = "/db/tables/users";
    catalog.write(path, "comment", json!("v1")).expect("write v1");
    tick();
    catalog.write(path, "comment", json!("v2")).expect("write v2");
    tick();
    let before_rm = now_ms();
    tick();

    assert!(catalog.read(path, Some(before_rm)).expect("read").is_some());

    catalog.rm(path, None).expect("rm");

    assert_eq!(catalog.read(path, Some(before_rm)).expect("read"), None);
    assert_eq!(catalog.ls("/db/tables", Some(before_rm)).expect("ls"), None);
    assert_eq!(catalog.read(path, None).expect("read"), None);

    let history = catalog
        .store()
        .history(&CatalogPath::parse(path))
        .expect("history");
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|entry| entry.is_deleted()));
    let stamps = history
        .iter()
        .map(|entry| entry.deleted_at_ms)
        .collect::<Vec<_>>();
    assert!(stamps.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn rm_leaves_ancestors_and_siblings_untouched() {
    let (_dir, catalog) = open_catalog();
    catalog.touch("/a/b/x").expect("touch b");
    catalog.touch("/a/bc/y").expect("touch bc");

    catalog.rm("/a/b", None).expect("rm b");

    assert_eq!(
        catalog.ls("/a", None).expect("ls"),
        Some(vec!["bc".to_string()])
    );
    assert!(catalog.read("/a/bc/y", None).expect("read").is_some());
    assert!(catalog.read("/a", None).expect("read").is_some());

    let sibling = catalog
        .store()
        .history(&CatalogPath::parse("/a/bc/y"))
        .expect("history");
    assert!(sibling.iter().all(|entry| entry.is_live()));
}

#[test]
fn removed_path_can_be_recreated() {
    let (_dir, catalog) = open_catalog();
    catalog.write("/a/b", "comment", json!("old")).expect("write");
    catalog.rm("/a", None).expect("rm a");
    tick();
    let removed = now_ms();
    tick();

    catalog.write("/a/b/c", "comment", json!("new")).expect("rewrite");

    assert_eq!(catalog.ls("/", None).expect("ls"), Some(vec!["a".to_string()]));
    assert_eq!(
        catalog.read("/a/b", None).expect("read"),
        Some(serde_json::Map::new())
    );
    assert_eq!(
        catalog
            .read("/a/b/c", None)
            .expect("read")
            .and_then(|doc| doc.get("comment").cloned()),
        Some(json!("new"))
    );
    assert_eq!(catalog.read("/a/b", Some(removed)).expect("read"), None);
}

#[test]
fn rm_of_root_clears_the_catalog() {
    let (_dir, catalog) = open_catalog();
    catalog.touch("/a/b").expect("touch");
    catalog.touch("/c").expect("touch");

    catalog.rm("/", None).expect("rm root");

    assert_eq!(catalog.ls("/", None).expect("ls"), None);
    assert_eq!(catalog.read("/a/b", None).expect("read"), None);

    catalog.touch("/c").expect("touch again");
    assert_eq!(catalog.ls("/", None).expect("ls"), Some(vec!["c".to_string()]));
}

#[test]
fn tombstone_bulk_reports_rows_stamped() {
    let (_dir, catalog) = open_catalog();
    catalog.write("/a/b", "comment", json!("x")).expect("write");
    catalog.touch("/a/b/c").expect("touch");
    catalog.touch("/z").expect("touch z");

    let rows = catalog
        .store()
        .tombstone_bulk(&CatalogPath::parse("/a"), now_ms())
        .expect("tombstone");
    // /a, two versions of /a/b, /a/b/c
    assert_eq!(rows, 4);
    assert_eq!(catalog.ls("/", None).expect("ls"), Some(vec!["z".to_string()]));
}

#[test]
fn stamped_rows_are_exactly_the_paths_within_the_target() {
    let (_dir, catalog) = open_catalog();
    let paths = ["/a/b/c", "/a/bc/d", "/ab", "/x"];
    for path in paths {
        catalog.write(path, "comment", json!(path)).expect("write");
    }

    let target = CatalogPath::parse("/a/b");
    catalog.rm(target.as_str(), None).expect("rm");

    let all = ["/a", "/a/b", "/a/b/c", "/a/bc", "/a/bc/d", "/ab", "/x"];
    for raw in all {
        let path = CatalogPath::parse(raw);
        let history = catalog.store().history(&path).expect("history");
        assert!(!history.is_empty(), "{raw} has history");
        let expected_deleted = path.is_within(&target);
        assert!(
            history.iter().all(|entry| entry.is_deleted() == expected_deleted),
            "{raw}: expected deleted={expected_deleted}"
        );
    }
}
