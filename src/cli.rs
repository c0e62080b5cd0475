use std::path::PathBuf;

use clap::Parser;

use crate::models::Category;

#[derive(Parser, Debug)]
#[command(
    name = "journal-checkr",
    about = "Flag journals in a BibTeX file that are missing from a trusted list",
    version
)]
pub struct Cli {
    /// BibTeX file to scan; prompts for one when omitted
    pub path: Option<PathBuf>,

    /// Config file [default: <bib dir>/.journal-checkr/config.toml, fallback ~/.config/journal-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Trusted journal list, one name per line
    #[arg(long, value_name = "FILE")]
    pub trusted: Option<PathBuf>,

    /// Preprint server list [default: built-in arXiv family list]
    #[arg(long, value_name = "FILE")]
    pub preprints: Option<PathBuf>,

    /// Predatory journal list
    #[arg(long, value_name = "FILE")]
    pub predatory: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exit with status 1 when an entry falls in this category (repeatable)
    #[arg(long = "fail-on", value_name = "CATEGORY")]
    pub fail_on: Vec<CategoryArg>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum CategoryArg {
    Preprint,
    Predatory,
    Unlisted,
}

impl From<&CategoryArg> for Category {
    fn from(arg: &CategoryArg) -> Self {
        match arg {
            CategoryArg::Preprint => Category::Preprint,
            CategoryArg::Predatory => Category::Predatory,
            CategoryArg::Unlisted => Category::Unlisted,
        }
    }
}
