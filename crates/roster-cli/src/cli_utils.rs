//! Common CLI utility functions shared across commands.

use anyhow::{Context, Result};
use roster_core::config::grades::MAX_GRADE;
use roster_core::export::{export_console, export_json, export_tsv};
use roster_core::{Record, RosterStore, ScoreSet};
use tracing::{debug, info};

use crate::cli::ExportFormat;

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: ExportFormat,
    pub color: bool,
}

/// Roster used when no `--student` is given
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Nguyen Van A", ScoreSet::new(10, 9, 8)),
        Record::new("Tran Thi B", ScoreSet::new(8, 7, 9)),
        Record::new("Le Van C", ScoreSet::new(9, 10, 9)),
        Record::new("Pham Thi D", ScoreSet::new(7, 8, 7)),
        Record::new("Hoang Van E", ScoreSet::new(10, 10, 10)),
    ]
}

/// Build the roster from command-line records, or the sample roster.
///
/// With `strict`, every grade must be at most `MAX_GRADE`.
pub fn build_roster(students: Vec<Record>, strict: bool) -> Result<RosterStore> {
    let records = if students.is_empty() {
        debug!("No students given, using sample roster");
        sample_records()
    } else {
        students
    };

    if strict {
        for record in &records {
            record
                .scores
                .validate(MAX_GRADE)
                .with_context(|| format!("Invalid grades for {}", record.name))?;
        }
    }

    let roster: RosterStore = records.into_iter().collect();
    info!("Loaded {} students", roster.len());
    Ok(roster)
}

/// Render records in display order
pub fn render<'a, I>(records: I, output: OutputOptions) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    Ok(match output.format {
        ExportFormat::Console => export_console(records, output.color),
        ExportFormat::Tsv => export_tsv(records),
        ExportFormat::Json => export_json(records)?,
    })
}
