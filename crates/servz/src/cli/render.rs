//! Terminal and JSON rendering of command results.
//!
//! `render_*` functions build plain strings so they can be tested; `print_*` functions
//! write them out. Column widths are measured with `unicode-width` before any color is
//! applied.

use colored::Colorize;
use serde::Serialize;
use servzapp::columns::{visible_columns, Column, COLUMNS};
use servzapp::commands::{CmdMessage, CmdResult, MessageLevel};
use servzapp::document::ExportArtifact;
use servzapp::model::ServerRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 28;
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Table of the visible columns, one row per record.
pub(super) fn render_server_table(records: &[ServerRecord]) -> String {
    let columns: Vec<&Column> = visible_columns().collect();

    let mut header: Vec<String> = vec!["ID".to_string()];
    header.extend(columns.iter().map(|c| c.label.to_string()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            let mut row = vec![record.display_id()];
            row.extend(columns.iter().map(|c| {
                truncate_to_width(record.fields.get(c.key).unwrap_or(""), MAX_CELL_WIDTH)
            }));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format_row(&header, &widths).bold().to_string());
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

/// Every field of each record, labelled.
pub(super) fn render_full_servers(records: &[ServerRecord]) -> String {
    let label_width = COLUMNS.iter().map(|c| c.label.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            record.display_id().yellow(),
            record.server_name().bold()
        ));
        for col in COLUMNS {
            let value = record.fields.get(col.key).unwrap_or("");
            out.push_str(&format!(
                "  {}  {}\n",
                pad_to_width(col.label, label_width).dimmed(),
                value
            ));
        }
    }
    out
}

#[derive(Serialize)]
pub(super) struct ColumnRow {
    key: &'static str,
    label: &'static str,
    filterable: bool,
}

pub(super) fn column_rows() -> Vec<ColumnRow> {
    COLUMNS
        .iter()
        .map(|c| ColumnRow {
            key: c.key,
            label: c.label,
            filterable: c.filterable,
        })
        .collect()
}

pub(super) fn render_columns() -> String {
    let key_width = COLUMNS.iter().map(|c| c.key.width()).max().unwrap_or(0);
    let label_width = COLUMNS.iter().map(|c| c.label.width()).max().unwrap_or(0);

    let mut out = String::new();
    for col in COLUMNS {
        let marker = if col.filterable { "filterable" } else { "" };
        let line = format!(
            "{}{}{}{}{}",
            pad_to_width(col.key, key_width),
            COLUMN_GAP,
            pad_to_width(col.label, label_width),
            COLUMN_GAP,
            marker
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
pub(super) struct ExportSummary<'a> {
    #[serde(flatten)]
    pub artifact: &'a ExportArtifact,
    pub path: String,
}

/// Shared text rendering for commands that return a `CmdResult`.
pub(super) fn print_result(result: &CmdResult) {
    if !result.listed_servers.is_empty() {
        print!("{}", render_server_table(&result.listed_servers));
    }
    print_messages(&result.messages);
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();
    if flat.width() <= max_width {
        return flat;
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
