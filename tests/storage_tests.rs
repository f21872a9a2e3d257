use photo_share::storage::db::DB_FILE;
use photo_share::storage::models::{url_for, PhotoRecord};
use photo_share::storage::Database;

fn test_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    (dir, db)
}

fn sample_photo(id: &str, ts: i64) -> PhotoRecord {
    let filename = format!("{id}.jpg");
    PhotoRecord {
        id: id.to_string(),
        friend: "Dana".to_string(),
        caption: "Beach day".to_string(),
        url: url_for(&filename),
        filename,
        ts,
    }
}

#[test]
fn test_open_creates_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let db = Database::open(&data_dir).unwrap();

    assert_eq!(db.path(), data_dir.join(DB_FILE));
    assert_eq!(std::fs::read_to_string(db.path()).unwrap(), "[]");
}

#[tokio::test]
async fn test_open_keeps_existing_document() {
    let (dir, db) = test_db();
    db.insert_photos(&[sample_photo("keep", 1)]).await.unwrap();

    let reopened = Database::open(dir.path().join("data")).unwrap();
    let photos = reopened.read_all().await;
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].id, "keep");
}

#[tokio::test]
async fn test_read_all_empty() {
    let (_dir, db) = test_db();
    assert!(db.read_all().await.is_empty());
}

#[tokio::test]
async fn test_read_all_corrupt_document_is_empty() {
    let (_dir, db) = test_db();
    std::fs::write(db.path(), "{ not json").unwrap();
    assert!(db.read_all().await.is_empty());
    assert!(db.list_photos().await.is_empty());
}

#[tokio::test]
async fn test_read_all_missing_document_is_empty() {
    let (_dir, db) = test_db();
    std::fs::remove_file(db.path()).unwrap();
    assert!(db.read_all().await.is_empty());
}

#[tokio::test]
async fn test_write_all_is_pretty_printed() {
    let (_dir, db) = test_db();
    db.write_all(&[sample_photo("p1", 10)]).await.unwrap();

    let raw = std::fs::read_to_string(db.path()).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"id\": \"p1\""), "got {raw}");

    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["url"], "/uploads/p1.jpg");
    assert_eq!(parsed[0]["ts"], 10);
}

#[tokio::test]
async fn test_write_all_leaves_no_temp_files() {
    let (dir, db) = test_db();
    db.write_all(&[sample_photo("p1", 10)]).await.unwrap();
    db.write_all(&[]).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path().join("data"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from(DB_FILE)]);
}

#[tokio::test]
async fn test_insert_preserves_creation_order() {
    let (_dir, db) = test_db();
    db.insert_photos(&[sample_photo("a", 1), sample_photo("b", 2)])
        .await
        .unwrap();
    db.insert_photos(&[sample_photo("c", 3)]).await.unwrap();

    let ids: Vec<String> = db.read_all().await.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_list_photos_newest_first() {
    let (_dir, db) = test_db();
    db.insert_photos(&[
        sample_photo("old", 100),
        sample_photo("new", 300),
        sample_photo("mid", 200),
    ])
    .await
    .unwrap();

    let ids: Vec<String> = db.list_photos().await.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn test_list_photos_ties_prefer_later_insert() {
    let (_dir, db) = test_db();
    db.insert_photos(&[sample_photo("first", 5), sample_photo("second", 5)])
        .await
        .unwrap();

    let ids: Vec<String> = db.list_photos().await.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["second", "first"]);
}

#[tokio::test]
async fn test_delete_photo() {
    let (_dir, db) = test_db();
    db.insert_photos(&[sample_photo("a", 1), sample_photo("b", 2)])
        .await
        .unwrap();

    let removed = db.delete_photo("a").await.unwrap().expect("photo should exist");
    assert_eq!(removed.id, "a");
    assert_eq!(removed.filename, "a.jpg");

    let remaining = db.read_all().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "b");
}

#[tokio::test]
async fn test_delete_photo_not_found() {
    let (_dir, db) = test_db();
    db.insert_photos(&[sample_photo("a", 1)]).await.unwrap();

    assert!(db.delete_photo("nonexistent").await.unwrap().is_none());
    assert_eq!(db.read_all().await.len(), 1);
}

#[tokio::test]
async fn test_concurrent_inserts_are_not_lost() {
    let (_dir, db) = test_db();

    let mut handles = Vec::new();
    for i in 0..16 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            db.insert_photos(&[sample_photo(&format!("p{i}"), i)])
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(db.read_all().await.len(), 16);
}

#[tokio::test]
async fn test_reads_document_written_by_other_tools() {
    let (_dir, db) = test_db();
    std::fs::write(
        db.path(),
        r#"[{"id":"x","friend":"Noa","caption":"","filename":"x.png","url":"/uploads/x.png","ts":1700000000000}]"#,
    )
    .unwrap();

    let photos = db.list_photos().await;
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].friend, "Noa");
    assert_eq!(photos[0].ts, 1_700_000_000_000);
}
