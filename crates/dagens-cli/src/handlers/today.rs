use crate::presentation::{self, terminal::ProgressSurface};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use dagens_feeds::WikimediaFeed;
use dagens_runtime::{Config, HistoricalEventsPanel, SystemClock};
use dagens_store::{KeyValueStore, MemoryStore, SqliteStore};
use dagens_types::{DateKey, Language, QueryType};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Command-line overrides for one run
#[derive(Debug, Default)]
pub struct TodayArgs {
    pub lang: Option<Language>,
    pub fallback_lang: Option<Language>,
    pub max_items: Option<usize>,
    pub query_type: Option<QueryType>,
    pub date: Option<DateKey>,
    pub no_cache: bool,
}

pub async fn handle(
    data_dir: &Path,
    config: &Config,
    args: TodayArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut panel_config = config.panel_config()?;
    if let Some(lang) = args.lang {
        panel_config.primary_language = lang;
    }
    if let Some(lang) = args.fallback_lang {
        panel_config.fallback_language = lang;
    }
    if let Some(max_items) = args.max_items {
        if max_items == 0 {
            bail!("--max-items must be at least 1");
        }
        panel_config.max_items = max_items;
    }
    if let Some(query_type) = args.query_type {
        panel_config.query_type = query_type;
    }

    let store: Arc<dyn KeyValueStore> = if args.no_cache {
        Arc::new(MemoryStore::new())
    } else {
        open_store(data_dir)
    };

    let feed = WikimediaFeed::new(&config.http_settings())?
        .with_base_url(&config.onthisday.feed_base_url);
    let surface = ProgressSurface::for_stderr();

    let mut panel = HistoricalEventsPanel::new(
        panel_config,
        Arc::new(feed),
        store,
        Arc::new(SystemClock),
        Arc::new(surface),
    );
    if let Some(date) = args.date {
        panel = panel.with_date(date);
    }

    let report = panel.init().await;
    println!(
        "{}",
        presentation::panel::render(&report, format, presentation::use_color())?
    );
    Ok(())
}

/// The on-disk cache, or a throwaway one when the database cannot be opened
fn open_store(data_dir: &Path) -> Arc<dyn KeyValueStore> {
    let db_path = dagens_core::cache_db_path(data_dir);
    match SqliteStore::open(&db_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(path = %db_path.display(), error = %e, "cache unavailable, running without it");
            Arc::new(MemoryStore::new())
        }
    }
}
