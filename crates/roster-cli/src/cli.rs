//! CLI argument definitions for roster.

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use roster_core::Record;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Student score roster", version)]
pub struct Args {
    /// Student record as NAME:MATH,PHYSICS,CHEMISTRY (repeatable, replaces the sample roster)
    #[arg(short, long = "student", value_name = "RECORD")]
    pub students: Vec<Record>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "console", env = "ROSTER_FORMAT")]
    pub format: ExportFormat,

    /// Disable colored console output (NO_COLOR: any value but empty/0/false/no/off)
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Reject grades above the maximum grade
    #[arg(long)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show students in insertion order
    List,
    /// Show students by average (descending), then name
    Rank,
    /// Show the student with the highest average
    Top,
    /// Find students whose average matches to two decimal places
    Find {
        /// Target average (e.g., 8.33)
        #[arg(short, long, allow_negative_numbers = true)]
        average: f64,
    },
    /// Show aggregate figures
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Console,
    Tsv,
    Json,
}
