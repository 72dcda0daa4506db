//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use intl_message::{Locale, PluralCategory};
use serde::Serialize;

/// One placeholder found in a checked template.
#[derive(Serialize)]
pub struct PlaceholderRow {
    /// 1-based template position on the command line.
    pub template: usize,
    pub name: String,
    pub formatter: Option<String>,
}

/// Format placeholders as an ASCII table.
pub fn format_placeholder_table(rows: &[PlaceholderRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Template", "Placeholder", "Formatter"]);

    for row in rows {
        table.add_row(vec![
            row.template.to_string(),
            row.name.clone(),
            row.formatter.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}

/// Format plural categories as an ASCII table.
pub fn format_plural_table(locale: &Locale, rows: &[(f64, PluralCategory)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Number".to_string(), format!("Category ({})", locale)]);

    for (n, category) in rows {
        table.add_row(vec![n.to_string(), category.to_string()]);
    }

    table
}
