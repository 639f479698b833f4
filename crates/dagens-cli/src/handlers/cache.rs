use crate::presentation;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use chrono::Utc;
use dagens_runtime::{Config, HistoryCache};
use dagens_store::SqliteStore;
use std::path::Path;
use std::sync::Arc;

pub fn list(data_dir: &Path, config: &Config, format: OutputFormat) -> Result<()> {
    let db_path = dagens_core::cache_db_path(data_dir);
    if !db_path.exists() {
        println!(
            "{}",
            presentation::cache::render_entries(&[], Utc::now(), format, false)?
        );
        return Ok(());
    }

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open cache at {}", db_path.display()))?;
    let ttl = config.panel_config()?.cache_ttl;
    let cache = HistoryCache::new(Arc::new(store), ttl);

    let now = Utc::now();
    let entries = cache.entries(now)?;
    println!(
        "{}",
        presentation::cache::render_entries(&entries, now, format, presentation::use_color())?
    );
    Ok(())
}

pub fn vacuum(data_dir: &Path) -> Result<()> {
    let db_path = dagens_core::cache_db_path(data_dir);
    if !db_path.exists() {
        println!("No cache database at {}", db_path.display());
        return Ok(());
    }

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open cache at {}", db_path.display()))?;
    store.vacuum()?;
    println!("Vacuumed {} ({} entries kept)", db_path.display(), store.len()?);
    Ok(())
}
