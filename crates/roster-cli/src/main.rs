mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("roster_cli=warn,roster_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let roster = cli_utils::build_roster(args.students, args.strict)?;
    let output = cli_utils::OutputOptions {
        format: args.format,
        color: !args.no_color,
    };

    match args.command {
        Some(Command::List) => commands::query::list(&roster, output),
        Some(Command::Rank) => commands::query::rank(&roster, output),
        Some(Command::Top) => commands::query::top(&roster, output),
        Some(Command::Find { average }) => commands::query::find(&roster, average, output),
        Some(Command::Summary) => commands::summary::run(&roster, output),
        None => commands::demo::run(&roster, output),
    }
}
