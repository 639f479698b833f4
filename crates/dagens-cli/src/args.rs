use crate::types::{LogLevel, OutputFormat};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dagens_types::{CurrencyCode, DateKey, Language, QueryType};

#[derive(Parser)]
#[command(name = "dagens")]
#[command(about = "What happened on this day, local weather and small calculators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory [default: $DAGENS_PATH, else the system data dir, else ~/.dagens]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show historical events for today (or another day)")]
    Today {
        /// Wikipedia language to try first
        #[arg(long)]
        lang: Option<Language>,

        /// Language to use when the first one fails
        #[arg(long)]
        fallback_lang: Option<Language>,

        #[arg(long)]
        max_items: Option<usize>,

        /// Which list to request: all, selected, events, births, deaths, holidays
        #[arg(long = "type")]
        query_type: Option<QueryType>,

        /// Calendar day as MM-DD instead of today
        #[arg(long)]
        date: Option<DateKey>,

        /// Neither read nor write the on-disk cache
        #[arg(long)]
        no_cache: bool,
    },

    #[command(about = "Look up the current weather for a place or coordinate")]
    Weather {
        #[arg(long, conflicts_with_all = ["lat", "lon"], required_unless_present_all = ["lat", "lon"])]
        city: Option<String>,

        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    #[command(about = "Small everyday calculators")]
    Calc {
        #[command(subcommand)]
        command: CalcCommand,
    },

    #[command(about = "Inspect and maintain the history cache")]
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },

    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum CalcCommand {
    #[command(about = "PERCENT % of VALUE")]
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },

    #[command(about = "Hourly wage from monthly salary and hours per week")]
    Hourly {
        monthly_salary: f64,
        hours_per_week: f64,
    },

    #[command(about = "Age on a given day (default today)")]
    Age {
        /// YYYY-MM-DD
        birth_date: NaiveDate,

        /// YYYY-MM-DD
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    #[command(about = "Distance between two dates")]
    DateDiff {
        /// YYYY-MM-DD
        from: NaiveDate,
        /// YYYY-MM-DD
        to: NaiveDate,
    },

    #[command(about = "Convert minutes to hours and days")]
    Minutes {
        #[arg(allow_negative_numbers = true)]
        minutes: f64,
    },

    #[command(about = "Current time in an IANA time zone")]
    Timezone {
        /// Zone name, e.g. Europe/Oslo, America/New_York, Asia/Tokyo
        zone: String,
    },

    #[command(about = "Evaluate an arithmetic expression (+ - * / and parentheses)")]
    Expr {
        /// Quote it to keep the shell away from * and ( ), e.g. "2 * (3 + 4)"
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    #[command(about = "Convert an amount using the latest exchange rate")]
    Currency {
        amount: f64,

        /// Target currency code, e.g. EUR
        to: CurrencyCode,

        /// Source currency [default: currency.base_currency from config, NOK]
        #[arg(long)]
        from: Option<CurrencyCode>,
    },
}

#[derive(Subcommand)]
pub enum CacheCommand {
    #[command(about = "List cached history entries with age and freshness")]
    List,

    #[command(about = "Compact the cache database file")]
    Vacuum,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a config file with default values")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Print the effective configuration")]
    Show,
}
