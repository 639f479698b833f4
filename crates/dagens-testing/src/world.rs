//! Isolated environment for running the `dagens` binary.

use anyhow::Result;
use assert_cmd::Command;
use chrono::{DateTime, Utc};
use dagens_runtime::Config;
use dagens_store::SqliteStore;
use dagens_types::CacheKey;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Temp data directory plus environment for CLI runs.
///
/// # Example
/// ```no_run
/// use dagens_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["calc", "percent", "25", "80"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".dagens");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        dagens_core::config_path(&self.data_dir)
    }

    pub fn cache_db_path(&self) -> PathBuf {
        dagens_core::cache_db_path(&self.data_dir)
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data directory
    pub fn with_config(self, config: &Config) -> Self {
        config
            .save_to(&self.config_path())
            .expect("Failed to write config");
        self
    }

    /// Point the feed at a local server, everything else default
    pub fn with_feed_base_url(self, base_url: &str) -> Self {
        let mut config = Config::default();
        config.onthisday.feed_base_url = base_url.to_string();
        config.http.timeout_secs = 5;
        self.with_config(&config)
    }

    /// Point the exchange-rate service at a local server
    pub fn with_rates_base_url(self, base_url: &str) -> Self {
        let mut config = Config::default();
        config.currency.base_url = base_url.to_string();
        config.http.timeout_secs = 5;
        self.with_config(&config)
    }

    /// Store an envelope in the on-disk cache the CLI reads
    pub fn seed_cache(
        &self,
        key: &CacheKey,
        payload: Value,
        captured_at: DateTime<Utc>,
    ) -> Result<()> {
        let store = SqliteStore::open(&self.cache_db_path())?;
        fixtures::seed_cache(&store, key, payload, captured_at)
    }

    /// Configure a CLI command with this environment's data dir and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove(dagens_core::DATA_DIR_ENV);

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `dagens` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("dagens")
            .map_err(|e| anyhow::anyhow!("Failed to find dagens binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
