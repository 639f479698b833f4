//! Assertions over `dagens today --format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that the panel rendered a listing with `expected` items
pub fn assert_listing_len(json: &Value, expected: usize) -> Result<()> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    if items.len() != expected {
        anyhow::bail!("Expected {} items, got {}", expected, items.len());
    }

    Ok(())
}

/// Assert that the panel shows a single text line equal to `expected`
pub fn assert_panel_text(json: &Value, expected: &str) -> Result<()> {
    let text = json["content"]["text"]
        .as_str()
        .context("Expected 'content.text' string in JSON")?;

    if text != expected {
        anyhow::bail!("Expected panel text {:?}, got {:?}", expected, text);
    }

    Ok(())
}

/// Assert the language the panel ended up rendering
pub fn assert_language(json: &Value, expected: &str) -> Result<()> {
    let language = json["language"]
        .as_str()
        .context("Expected 'language' string in JSON")?;

    if language != expected {
        anyhow::bail!("Expected language {}, got {}", expected, language);
    }

    Ok(())
}
