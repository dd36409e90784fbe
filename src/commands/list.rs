//! List command - Show recently opened notebooks

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::colab::recent::RecentList;
use crate::config;

/// Execute the list command and return formatted output
///
/// `count` is signed because the flag accepts whatever the user types;
/// non-positive counts are clamped to zero and render as an empty listing.
pub fn execute(count: i64) -> Result<String> {
    let recent = RecentList::new(config::recent_file()?);
    recent.ensure_initialized()?;

    let entries = recent.list(count.max(0) as usize);
    Ok(render(&entries))
}

fn render(entries: &[String]) -> String {
    if entries.is_empty() {
        return "No recent notebooks found".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("#"), Cell::new("Notebook")]);

    for (i, path) in entries.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(path)]);
    }

    format!("Recent notebooks:\n{table}")
}
