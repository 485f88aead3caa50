//! Default mode: walk through every roster query.

use anyhow::Result;
use roster_core::RosterStore;

use crate::cli_utils::{self, OutputOptions};

/// Average searched for in the walkthrough
const DEMO_AVERAGE: f64 = 8.0;

pub fn run(roster: &RosterStore, output: OutputOptions) -> Result<()> {
    section("STUDENTS");
    println!("{}", cli_utils::render(roster.list(), output)?);

    section("RANKED BY AVERAGE (DESCENDING)");
    println!("{}", cli_utils::render(roster.ranked(), output)?);

    section("HIGHEST AVERAGE");
    match roster.top() {
        Some(top) => println!("{}", top),
        None => println!("No students"),
    }

    section(&format!("AVERAGE {:.2}", DEMO_AVERAGE));
    let found = roster.find_by_average(DEMO_AVERAGE);
    if found.is_empty() {
        println!("No matches");
    } else {
        println!("{}", cli_utils::render(found, output)?);
    }

    Ok(())
}

fn section(title: &str) {
    println!();
    println!("=== {} ===", title);
    println!();
}
