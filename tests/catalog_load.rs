use std::fs;
use std::path::Path;

use tempfile::tempdir;

use homeplace_backend::store::Catalog;

#[test]
fn bundled_content_loads_cleanly() {
    let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    let catalog = Catalog::load(&content_dir).unwrap();
    assert!(!catalog.properties.is_empty());
    assert!(!catalog.blog_posts.is_empty());
    assert!(!catalog.neighborhoods.is_empty());
    assert!(catalog.area_item_count() > 0);
}

#[test]
fn malformed_content_fails_the_load_naming_the_file() {
    let dir = tempdir().unwrap();
    for file in [
        "properties.json",
        "blog_posts.json",
        "neighborhoods.json",
        "dining.json",
        "attractions.json",
        "events.json",
        "beaches.json",
    ] {
        fs::write(dir.path().join(file), "[]").unwrap();
    }
    // a property without its required price must fail fast, not at render time
    fs::write(
        dir.path().join("properties.json"),
        r#"[{"id": "p1", "title": "No price", "address": "1 Main St",
             "city": "Dunedin", "state": "FL", "zip": "34698",
             "beds": 3, "baths": 2.0,
             "created_date": "2025-01-01T00:00:00Z",
             "updated_date": "2025-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    let err = Catalog::load(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("properties.json"));
}

#[test]
fn missing_collection_file_fails_the_load() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("properties.json"), "[]").unwrap();

    let err = Catalog::load(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("blog_posts.json"));
}

#[test]
fn duplicate_ids_fail_the_load() {
    let dir = tempdir().unwrap();
    for file in [
        "properties.json",
        "blog_posts.json",
        "neighborhoods.json",
        "dining.json",
        "attractions.json",
        "events.json",
        "beaches.json",
    ] {
        fs::write(dir.path().join(file), "[]").unwrap();
    }
    fs::write(
        dir.path().join("dining.json"),
        r#"[{"slug": "taproom", "title": "The Taproom"},
            {"slug": "taproom", "title": "The Other Taproom"}]"#,
    )
    .unwrap();

    let err = Catalog::load(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate id"));
}
