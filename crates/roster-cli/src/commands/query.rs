//! Roster query commands.

use anyhow::Result;
use roster_core::RosterStore;

use crate::cli_utils::{self, OutputOptions};

pub fn list(roster: &RosterStore, output: OutputOptions) -> Result<()> {
    print(cli_utils::render(roster.list(), output)?);
    Ok(())
}

pub fn rank(roster: &RosterStore, output: OutputOptions) -> Result<()> {
    print(cli_utils::render(roster.ranked(), output)?);
    Ok(())
}

pub fn top(roster: &RosterStore, output: OutputOptions) -> Result<()> {
    if roster.is_empty() {
        eprintln!("No students");
    }
    print(cli_utils::render(roster.top(), output)?);
    Ok(())
}

pub fn find(roster: &RosterStore, average: f64, output: OutputOptions) -> Result<()> {
    let found = roster.find_by_average(average);
    if found.is_empty() {
        eprintln!("No student with average {:.2}", average);
    }
    print(cli_utils::render(found, output)?);
    Ok(())
}

fn print(content: String) {
    if !content.is_empty() {
        println!("{}", content);
    }
}
