//! `journal-checkr` — flag bibliography journals missing from a trusted list.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]); prompt for a `.bib` file if none given ([`input`]).
//! 2. Load config ([`config::load_config`]) and merge command-line overrides.
//! 3. Load the trusted, preprint and predatory lists ([`reference`]).
//! 4. Extract `@article` journals and classify them ([`scan`], [`bib`], [`journal`]).
//! 5. Render the requested report ([`report`]).
//! 6. Exit `0`, or `1` when an entry falls in a `fail_on` category.

mod bib;
mod cli;
mod config;
mod error;
mod input;
mod journal;
mod models;
mod reference;
mod report;
mod scan;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::{apply_policy, load_config};
use models::Category;
use reference::ReferenceSets;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("journal_checkr=debug,info")
    } else {
        EnvFilter::new("journal_checkr=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Resolve the bibliography path
    let path = match cli.path {
        Some(path) => path,
        None => match input::prompt_for_path()? {
            Some(path) => path,
            None => return Ok(()),
        },
    };
    input::validate_bib_path(&path)?;

    // Load config, command-line flags take precedence
    let bib_dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let mut config = load_config(bib_dir, cli.config.as_deref())?;
    config
        .lists
        .override_with(cli.trusted, cli.preprints, cli.predatory);
    config
        .policy
        .fail_on
        .extend(cli.fail_on.iter().map(Category::from));

    // Reference data must be complete before anything is scanned
    let sets = ReferenceSets::load(&config.lists)?;

    let text = input::read_bib(&path)?;
    let report = scan::scan(&text, &sets);

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&report, &path, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if apply_policy(&config, &report) {
        std::process::exit(1);
    }

    Ok(())
}
