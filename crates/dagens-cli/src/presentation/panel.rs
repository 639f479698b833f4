use super::html::{escape, external_link};
use crate::types::OutputFormat;
use anyhow::Result;
use dagens_engine::{ItemLine, Listing, PanelContent};
use dagens_runtime::{PanelReport, PanelState, RenderSource};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct PanelReportView<'a> {
    date: String,
    state: PanelState,
    language: Option<&'a str>,
    cached: bool,
    content: &'a PanelContent,
    errors: Vec<String>,
}

pub fn render(report: &PanelReport, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(&report.content, color)),
        OutputFormat::Html => Ok(render_html(&report.content)),
        OutputFormat::Json => super::to_json(&PanelReportView {
            date: report.date.to_string(),
            state: report.state,
            language: report.language.as_ref().map(|l| l.as_str()),
            cached: report.source().is_some_and(RenderSource::is_cache_hit),
            content: &report.content,
            errors: report.errors.iter().map(ToString::to_string).collect(),
        }),
    }
}

pub fn render_plain(content: &PanelContent, color: bool) -> String {
    match content {
        PanelContent::Text { text } => text.clone(),
        PanelContent::Listing(listing) => plain_listing(listing, color),
    }
}

fn plain_listing(listing: &Listing, color: bool) -> String {
    let mut lines = Vec::with_capacity(listing.items.len() * 2 + 2);

    if color {
        lines.push(listing.header.bold().to_string());
    } else {
        lines.push(listing.header.clone());
    }

    for item in &listing.items {
        lines.push(format!("  {}", plain_item(item, color)));
        if let Some(link) = &item.link {
            let link = if color {
                link.dimmed().to_string()
            } else {
                link.clone()
            };
            lines.push(format!("    {}", link));
        }
    }

    lines.push(format!("{} ({})", listing.source_label, listing.source_url));
    lines.join("\n")
}

fn plain_item(item: &ItemLine, color: bool) -> String {
    match (&item.year, color) {
        (Some(year), true) => format!("{}: {}", year.cyan(), item.text),
        _ => item.display_line(),
    }
}

/// Header, `<ul>` of items in feed order and source line, in the panel's DOM shape
pub fn render_html(content: &PanelContent) -> String {
    let listing = match content {
        PanelContent::Text { text } => return escape(text),
        PanelContent::Listing(listing) => listing,
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"otd-header\"><strong>{}</strong></div>\n",
        escape(&listing.header)
    ));
    out.push_str("<ul class=\"otd-list\">\n");
    for item in &listing.items {
        let year = item
            .year
            .as_ref()
            .map(|y| format!("{}: ", escape(y)))
            .unwrap_or_default();
        let text = match &item.link {
            Some(link) => external_link(link, &item.text),
            None => escape(&item.text),
        };
        out.push_str(&format!(
            "  <li class=\"otd-item\"><span class=\"otd-year\">{}</span><span class=\"otd-text\">{}</span></li>\n",
            year, text
        ));
    }
    out.push_str("</ul>\n");
    out.push_str(&format!(
        "<div class=\"otd-source\">{}</div>",
        external_link(&listing.source_url, &listing.source_label)
    ));
    out
}
