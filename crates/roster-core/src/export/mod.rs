//! Rendering of record sequences for output.
//!
//! Every exporter takes records in the order they should appear and numbers
//! them from 1 in that order.

mod console;

pub use console::*;

use serde::Serialize;

use crate::error::Result;
use crate::student::Record;

/// One exported line: a record with its 1-based position in the output.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow<'a> {
    pub position: usize,
    pub name: &'a str,
    pub math: u32,
    pub physics: u32,
    pub chemistry: u32,
    pub average: f64,
}

impl<'a> ExportRow<'a> {
    pub fn new(position: usize, record: &'a Record) -> Self {
        Self {
            position,
            name: &record.name,
            math: record.scores.math,
            physics: record.scores.physics,
            chemistry: record.scores.chemistry,
            average: record.average(),
        }
    }
}

pub fn rows<'a, I>(records: I) -> Vec<ExportRow<'a>>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ExportRow::new(i + 1, record))
        .collect()
}

pub fn format_tsv_header() -> String {
    ["position", "name", "math", "physics", "chemistry", "average"].join("\t")
}

/// Tabs and line breaks in the name are replaced with spaces
pub fn format_tsv_row(row: &ExportRow<'_>) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{:.2}",
        row.position,
        tsv_field(row.name),
        row.math,
        row.physics,
        row.chemistry,
        row.average
    )
}

fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

/// Header line followed by one line per record
pub fn export_tsv<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut lines = vec![format_tsv_header()];
    lines.extend(rows(records).iter().map(format_tsv_row));
    lines.join("\n")
}

pub fn export_json<'a, I>(records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    Ok(serde_json::to_string_pretty(&rows(records))?)
}
