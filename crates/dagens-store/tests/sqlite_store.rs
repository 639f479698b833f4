//! Integration tests for the on-disk store
//!
//! These tests verify persistence across reopen and schema recreation on
//! version mismatch.

use dagens_store::{KeyValueStore, SCHEMA_VERSION, SqliteStore};
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn test_values_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cache.db");

    {
        let store = SqliteStore::open(&db_path).unwrap();
        store.set("otd:en:all:1224", br#"{"ts":1,"data":{}}"#).unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(
        store.get("otd:en:all:1224"),
        Some(br#"{"ts":1,"data":{}}"#.to_vec())
    );
}

#[test]
fn test_open_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("cache.db");

    let store = SqliteStore::open(&db_path).unwrap();
    store.set("k", b"v").unwrap();

    assert!(db_path.exists());
}

#[test]
fn test_old_schema_is_recreated() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("cache.db");

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT);
            INSERT INTO kv (key, value) VALUES ('stale', 'x');
            PRAGMA user_version = 0;
            "#,
        )
        .unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.get("stale"), None);
    assert!(store.is_empty().unwrap());

    let conn = Connection::open(&db_path).unwrap();
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn test_vacuum_keeps_entries() {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&temp_dir.path().join("cache.db")).unwrap();
    store.set("a", b"1").unwrap();

    store.vacuum().unwrap();
    assert_eq!(store.get("a"), Some(b"1".to_vec()));
}
