use std::time::Instant;
use tracing::info;

use crate::domain::extract_domains;
use crate::options::ExtractionOptions;
use crate::stats::{ExtractionResult, Statistics};
use crate::urls::extract_urls;

/// Run both scans over `text` and attach occurrence statistics.
///
/// Never fails: empty text produces an empty result.
pub fn extract_all(text: &str, options: &ExtractionOptions) -> ExtractionResult {
    let total_start_time = Instant::now();

    let domains = extract_domains(text, options);
    let urls = extract_urls(text, options);
    let statistics = Statistics::compute(text, &domains, &urls);

    info!(
        action = "complete",
        component = "extraction",
        text_len = text.len(),
        total_domains = statistics.total_domains,
        total_urls = statistics.total_urls,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Extraction completed"
    );

    ExtractionResult {
        domains,
        urls,
        statistics,
    }
}
