use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::format::OutputFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Show {
    Domains,
    Urls,
    All,
    #[default]
    Report,
}

#[derive(Parser, Debug)]
#[command(
    name = "domain-extractor",
    about = "Extract domains and URLs from free-form text",
    version,
    long_about = None
)]
pub struct Args {
    /// Files to read; stdin is used when none are given
    pub inputs: Vec<PathBuf>,

    /// Extract from this text instead of files or stdin
    #[arg(long, conflicts_with = "inputs")]
    pub text: Option<String>,

    /// JSON file with partial extraction options
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Collapse subdomains to their last two labels
    #[arg(long)]
    pub no_subdomains: bool,

    /// Keep repeated domains and URLs
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Keep a leading `www.` on domains
    #[arg(long)]
    pub include_www: bool,

    /// Keep results in the order they appear
    #[arg(long)]
    pub no_sort: bool,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Show::Report)]
    pub show: Show,

    /// How to join printed lists
    #[arg(short, long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Print a clipboard export instead of the normal output
    #[arg(short, long, value_enum)]
    pub export: Option<ExportFormat>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of most frequent domains to list in the report
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Redact domain names in the report
    #[arg(long)]
    pub redact: bool,

    /// Treat stdin as an API request body and print the response
    #[arg(long, conflicts_with_all = ["inputs", "text"])]
    pub request: bool,

    /// Print the API documentation response
    #[arg(long)]
    pub api_docs: bool,

    /// Number of worker threads for multiple input files
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
