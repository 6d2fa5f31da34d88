use std::fmt::Write;

use crate::format::{format_results, OutputFormat};
use crate::stats::ExtractionResult;
use crate::utils::{format_number, redact_domain};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSettings {
    pub top: Option<usize>,
    pub redact: bool,
    pub format: OutputFormat,
}

/// Human-readable summary: counts, the domain and URL lists, and optionally
/// the most frequent domains.
pub fn render_report(result: &ExtractionResult, settings: &ReportSettings) -> String {
    let stats = &result.statistics;
    let display = |domain: &str| {
        if settings.redact {
            redact_domain(domain)
        } else {
            domain.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "--- Extraction Results ---");
    let _ = writeln!(out, "Domains found: {}", format_number(stats.total_domains));
    let _ = writeln!(
        out,
        "Distinct domains: {}",
        format_number(stats.domain_occurrences.len())
    );
    let _ = writeln!(out, "URLs found: {}", format_number(stats.total_urls));

    let domains: Vec<String> = result.domains.iter().map(|d| display(d.as_str())).collect();
    if !domains.is_empty() {
        let _ = writeln!(out, "\nDomains:\n{}", format_results(&domains, settings.format));
    }
    if !result.urls.is_empty() {
        let _ = writeln!(out, "\nURLs:\n{}", format_results(&result.urls, settings.format));
    }

    if let Some(top_count) = settings.top {
        let ranked = stats.ranked();
        let _ = writeln!(
            out,
            "\nTop {} most mentioned domains:",
            std::cmp::min(top_count, ranked.len())
        );
        for (domain, count) in ranked.into_iter().take(top_count) {
            let noun = if count == 1 { "occurrence" } else { "occurrences" };
            let _ = writeln!(out, "- {}: {} {}", display(domain), format_number(count), noun);
        }
    }

    out
}
