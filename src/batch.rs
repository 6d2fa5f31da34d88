use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::extract::extract_all;
use crate::options::ExtractionOptions;
use crate::stats::ExtractionResult;

#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub result: ExtractionResult,
}

pub fn default_workers() -> usize {
    std::cmp::min(num_cpus::get(), 8)
}

/// Extract every file independently with the same options.
///
/// Results come back in input order. The first unreadable file fails the batch.
pub fn extract_files(
    paths: &[PathBuf],
    options: &ExtractionOptions,
    max_workers: Option<usize>,
) -> Result<Vec<FileResult>> {
    let start_time = Instant::now();
    let max_workers = max_workers.unwrap_or_else(default_workers);

    info!(
        action = "configure",
        component = "batch_extraction",
        file_count = paths.len(),
        worker_count = max_workers,
        "Using workers for processing"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_workers)
        .build()
        .context("Failed to build worker pool")?;

    let results = pool.install(|| {
        paths
            .par_iter()
            .map(|path| extract_file(path, options))
            .collect::<Result<Vec<_>>>()
    })?;

    info!(
        action = "complete",
        component = "batch_extraction",
        file_count = results.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Batch extraction completed"
    );
    Ok(results)
}

fn extract_file(path: &Path, options: &ExtractionOptions) -> Result<FileResult> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(FileResult {
        path: path.to_path_buf(),
        result: extract_all(&text, options),
    })
}
