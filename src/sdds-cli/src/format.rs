//! Output formatting for decoded tables

use anyhow::Result;
use sdds::{DecodedTable, Value};
use serde::{Deserialize, Serialize};

/// Output format for the decode command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key: value` lines from the key and value columns
    #[default]
    Pairs,
    /// Tab-separated rows with a header line
    Tsv,
    /// The whole table as JSON
    Json,
    /// Aligned columns for reading in a terminal
    Table,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pairs => "pairs",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Table => "table",
        }
    }
}

/// Widest cell rendered by the table format
const MAX_CELL_WIDTH: usize = 40;

/// Format key/value pairs, one per line
pub fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, value))
        .collect()
}

/// Format rows as TSV with a header line of column names
pub fn format_tsv(table: &DecodedTable) -> String {
    let mut output = table.column_names().collect::<Vec<_>>().join("\t");
    output.push('\n');

    for row in table.rows() {
        let cells: Vec<String> = row.values().into_iter().map(tsv_cell).collect();
        output.push_str(&cells.join("\t"));
        output.push('\n');
    }

    output
}

fn tsv_cell(value: &Value) -> String {
    value
        .to_string()
        .replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Format the table as pretty-printed JSON
pub fn format_json(table: &DecodedTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Format parameters, arrays and rows for a terminal
pub fn format_table(table: &DecodedTable) -> String {
    let mut output = String::new();

    for param in table.parameters() {
        output.push_str(&format!("{} ({}) = {}\n", param.name, param.field_type, param.value));
    }
    for array in table.arrays() {
        output.push_str(&format!(
            "{} ({}[{}])\n",
            array.name,
            array.field_type,
            array.values.len()
        ));
    }
    if !output.is_empty() {
        output.push('\n');
    }

    let names: Vec<&str> = table.column_names().collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.values().into_iter().map(|v| truncate(&v.to_string())).collect())
        .collect();

    let widths: Vec<usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = join_padded(names.iter().copied(), &widths);
    output.push_str(&format!("{}\n", header));
    output.push_str(&format!("{}\n", "-".repeat(header.chars().count())));

    for cells in &rows {
        output.push_str(&format!("{}\n", join_padded(cells.iter().map(String::as_str), &widths)));
    }

    output.push_str(&format!("({} rows)\n", table.row_count()));
    output
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

fn truncate(cell: &str) -> String {
    let cell = cell.replace(['\n', '\r', '\t'], " ");
    if cell.chars().count() > MAX_CELL_WIDTH {
        let kept: String = cell.chars().take(MAX_CELL_WIDTH - 1).collect();
        format!("{}…", kept)
    } else {
        cell
    }
}
