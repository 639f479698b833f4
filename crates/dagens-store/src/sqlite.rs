use crate::schema::init_schema;
use crate::traits::{KeyValueStore, StoredValue};
use crate::{Error, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// SQLite-backed store, one row per key
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::Unavailable("connection lock poisoned".to_string()))
    }

    fn try_get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = self.lock()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Number of stored keys
    pub fn len(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Compact the database file
    pub fn vacuum(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("VACUUM", [])?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                debug!(key, error = %err, "store read failed; treating as absent");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO kv (key, value, updated_at)
            VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    fn scan(&self, prefix: &str) -> Result<Vec<StoredValue>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT key, value FROM kv
            WHERE substr(key, 1, length(?1)) = ?1
            ORDER BY key
            "#,
        )?;
        let rows = stmt.query_map([prefix], |row| {
            Ok(StoredValue {
                key: row.get(0)?,
                value: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        store.set("otd:en:all:0101", b"{}")?;

        assert_eq!(store.get("otd:en:all:0101"), Some(b"{}".to_vec()));
        assert_eq!(store.get("otd:en:all:0102"), None);
        Ok(())
    }

    #[test]
    fn test_last_writer_wins() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        store.set("k", b"first")?;
        store.set("k", b"second")?;

        assert_eq!(store.get("k"), Some(b"second".to_vec()));
        assert_eq!(store.len()?, 1);
        Ok(())
    }

    #[test]
    fn test_scan_prefix_is_literal() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        store.set("otd:en:all:0101", b"a")?;
        store.set("otd:nb:all:0101", b"b")?;
        store.set("other%:x", b"c")?;

        let keys: Vec<String> = store.scan("otd:")?.into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["otd:en:all:0101", "otd:nb:all:0101"]);

        // '%' is not a wildcard
        assert_eq!(store.scan("other%")?.len(), 1);
        assert!(store.scan("o%")?.is_empty());
        Ok(())
    }
}
