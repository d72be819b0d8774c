mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use one_piece_rename::{Renamer, SeasonTable, logging, resolve_all_or_fail};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let table = match &cli.table {
        Some(path) => SeasonTable::from_json_file(path)
            .with_context(|| format!("Failed to load season table {}", path.display()))?,
        None => SeasonTable::one_piece(),
    };
    tracing::debug!(
        "Using season table with {} seasons, {} episodes",
        table.seasons(),
        table.total_episodes()
    );

    // Nothing is renamed unless every path resolves.
    let paths = resolve_all_or_fail(&cli.paths)?;

    let renamer = Renamer::new(table);
    let summary = renamer.rename_all(&paths);

    tracing::info!(
        "Summary: {} of {} file(s) renamed, {} skipped, {} failed",
        summary.renamed,
        summary.total(),
        summary.skipped,
        summary.failed
    );

    Ok(())
}
