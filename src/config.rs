use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::args::Args;
use crate::options::{ExtractionOptions, PartialExtractionOptions};

/// Read a partial options file such as `{"includeWww": true}`.
pub fn load_options_file(path: &Path) -> Result<PartialExtractionOptions> {
    let start_time = Instant::now();
    info!(action = "load", component = "options_file", file_path = ?path, "Loading options file");

    if !path.exists() {
        anyhow::bail!("Options file not found: {:?}", path);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {:?}", path))?;
    let partial: PartialExtractionOptions = serde_json::from_str(&content)
        .with_context(|| format!("Invalid options file {:?}", path))?;

    info!(
        action = "loaded",
        component = "options_file",
        file_path = ?path,
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded options file"
    );
    Ok(partial)
}

/// Options from the command-line flags alone; unset flags leave keys open.
pub fn flag_options(args: &Args) -> PartialExtractionOptions {
    fn off(flag: bool) -> Option<bool> {
        flag.then_some(false)
    }

    PartialExtractionOptions {
        include_subdomains: off(args.no_subdomains),
        remove_duplicates: off(args.keep_duplicates),
        include_www: args.include_www.then_some(true),
        sort_results: off(args.no_sort),
    }
}

/// Defaults, then the options file, then flags.
pub fn resolve_options(args: &Args) -> Result<ExtractionOptions> {
    let from_file = match args.options.as_deref() {
        Some(path) => load_options_file(path)?,
        None => PartialExtractionOptions::default(),
    };
    Ok(from_file.or(flag_options(args)).resolve())
}
