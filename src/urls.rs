use std::time::Instant;
use tracing::{debug, trace};
use url::Url;

use crate::domain::order;
use crate::options::ExtractionOptions;
use crate::patterns::URL_TRAILING_PUNCTUATION;
use crate::scan;

/// Extract absolute `http`, `https`, `ftp` and `ftps` URLs from text.
///
/// Trailing punctuation is stripped and each candidate must parse as a URL;
/// anything that does not parse is dropped. The returned strings are the
/// trimmed text as written, not the parser's serialization.
pub fn extract_urls(text: &str, options: &ExtractionOptions) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let start_time = Instant::now();
    let mut rejected = 0usize;

    let urls: Vec<String> = scan::url_candidates(text)
        .filter_map(|candidate| {
            let trimmed = candidate.text.trim_end_matches(URL_TRAILING_PUNCTUATION);
            match Url::parse(trimmed) {
                Ok(_) => Some(trimmed.to_string()),
                Err(e) => {
                    trace!(candidate = trimmed, error = %e, "Dropped URL candidate");
                    rejected += 1;
                    None
                }
            }
        })
        .collect();

    let urls = order(urls, options);
    debug!(
        action = "complete",
        component = "url_extraction",
        url_count = urls.len(),
        rejected,
        duration_ms = start_time.elapsed().as_millis(),
        "URL extraction completed"
    );
    urls
}
