//! Summary command implementation.

use anyhow::Result;
use roster_core::RosterStore;
use roster_core::export::format_summary_console;

use crate::cli::ExportFormat;
use crate::cli_utils::OutputOptions;

pub fn run(roster: &RosterStore, output: OutputOptions) -> Result<()> {
    let summary = roster.summary();

    match output.format {
        ExportFormat::Console => println!("{}", format_summary_console(&summary)),
        ExportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        ExportFormat::Tsv => {
            let cell = |value: Option<f64>| value.map_or_else(String::new, |v| format!("{v:.2}"));
            println!("count\tmean\thighest\tlowest");
            println!(
                "{}\t{}\t{}\t{}",
                summary.count,
                cell(summary.mean_average),
                cell(summary.highest_average),
                cell(summary.lowest_average)
            );
        }
    }

    Ok(())
}
