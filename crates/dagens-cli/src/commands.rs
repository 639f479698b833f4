use super::args::{CacheCommand, Cli, Commands, ConfigCommand};
use super::handlers;
use super::handlers::today::TodayArgs;
use super::handlers::weather::WeatherTarget;
use crate::types::LogLevel;
use anyhow::{Context, Result};
use dagens_runtime::Config;
use std::future::Future;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    let data_dir = dagens_core::resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = dagens_core::config_path(&data_dir);

    let Some(command) = cli.command else {
        show_guidance(&config_path);
        return Ok(());
    };

    match command {
        Commands::Today {
            lang,
            fallback_lang,
            max_items,
            query_type,
            date,
            no_cache,
        } => {
            let config = load_config(&config_path)?;
            let args = TodayArgs {
                lang,
                fallback_lang,
                max_items,
                query_type,
                date,
                no_cache,
            };
            block_on(handlers::today::handle(&data_dir, &config, args, cli.format))?
        }

        Commands::Weather { city, lat, lon } => {
            let config = load_config(&config_path)?;
            let target = match (city, lat, lon) {
                (Some(name), _, _) => WeatherTarget::City(name),
                (None, Some(lat), Some(lon)) => WeatherTarget::Coordinates { lat, lon },
                _ => anyhow::bail!("either --city or both --lat and --lon are required"),
            };
            block_on(handlers::weather::handle(&config, target, cli.format))?
        }

        Commands::Calc { command } => handlers::calc::handle(command, &config_path, cli.format),

        Commands::Cache { command } => match command {
            CacheCommand::List => {
                let config = load_config(&config_path)?;
                handlers::cache::list(&data_dir, &config, cli.format)
            }
            CacheCommand::Vacuum => handlers::cache::vacuum(&data_dir),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
            ConfigCommand::Show => {
                let config = load_config(&config_path)?;
                handlers::config::show(&config, cli.format)
            }
        },
    }
}

/// `RUST_LOG` wins over `--log-level`; logs go to stderr
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    Config::load_from(config_path)
        .with_context(|| format!("invalid configuration in {}", config_path.display()))
}

pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

fn show_guidance(config_path: &Path) {
    println!("dagens - what happened on this day, and a few daily helpers\n");

    if !config_path.exists() {
        println!("Get started:");
        println!("  dagens config init\n");
    }

    println!("Quick commands:");
    println!("  dagens today                      # Historical events for today");
    println!("  dagens today --lang nb            # ...from Norwegian Wikipedia");
    println!("  dagens weather --city Oslo        # Current weather");
    println!("  dagens calc hourly 52000 37.5     # Hourly wage");
    println!("  dagens cache list                 # Cached history entries\n");

    println!("For more commands:");
    println!("  dagens --help");
}
