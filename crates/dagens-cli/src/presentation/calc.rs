use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// One calculator result: named values plus their plain-text rendering
pub struct CalcOutput<T: Serialize> {
    pub value: T,
    pub lines: Vec<String>,
}

pub fn render<T: Serialize>(output: &CalcOutput<T>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => super::to_json(&output.value),
        OutputFormat::Html => Ok(output
            .lines
            .iter()
            .map(|line| format!("<p>{}</p>", super::html::escape(line)))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Plain => Ok(output.lines.join("\n")),
    }
}
