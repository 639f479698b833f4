mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{CacheCommand, CalcCommand, Cli, Commands, ConfigCommand};
pub use commands::run;
