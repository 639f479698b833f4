use crate::presentation;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use dagens_runtime::Config;
use std::path::Path;

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

pub fn show(config: &Config, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Json => presentation::to_json(config)?,
        OutputFormat::Plain | OutputFormat::Html => toml::to_string_pretty(config)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
