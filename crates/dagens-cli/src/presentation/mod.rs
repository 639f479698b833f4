//! Output rendering for every command.
//!
//! Handlers compute results; this module turns them into plain text, HTML
//! fragments or JSON. Nothing here performs I/O besides the terminal surface.

pub mod cache;
pub mod calc;
pub mod html;
pub mod panel;
pub mod terminal;
pub mod weather;

use is_terminal::IsTerminal;

/// Colors only for an interactive stdout, and never when `NO_COLOR` is set
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
