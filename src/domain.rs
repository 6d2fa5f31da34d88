use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, trace};

use crate::options::ExtractionOptions;
use crate::patterns::{
    DOMAIN_STRUCTURE, DOMAIN_TRAILING_PUNCTUATION, FILE_EXTENSIONS, SCHEME_PREFIX, WWW_PREFIX,
};
use crate::scan::{self, Candidate};

/// Extract normalized, lower-cased domains from free-form text.
///
/// Domains that directly follow an `@` are treated as email addresses and
/// skipped. Empty text yields an empty list.
pub fn extract_domains(text: &str, options: &ExtractionOptions) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let start_time = Instant::now();
    let mut domains = Vec::new();
    let mut rejected = 0usize;

    for candidate in scan::domain_candidates(text) {
        match normalize_candidate(text, &candidate, options) {
            Some(domain) => domains.push(domain),
            None => {
                trace!(candidate = candidate.text, offset = candidate.start, "Dropped domain candidate");
                rejected += 1;
            }
        }
    }

    let domains = order(domains, options);
    debug!(
        action = "complete",
        component = "domain_extraction",
        domain_count = domains.len(),
        rejected,
        duration_ms = start_time.elapsed().as_millis(),
        "Domain extraction completed"
    );
    domains
}

/// Turn one raw candidate into a domain token, or `None` if it should be dropped.
pub fn normalize_candidate(
    text: &str,
    candidate: &Candidate<'_>,
    options: &ExtractionOptions,
) -> Option<String> {
    if candidate.preceding_char(text) == Some('@') {
        return None;
    }

    let mut domain = candidate.text;
    if let Some(scheme) = SCHEME_PREFIX.find(domain) {
        domain = &domain[scheme.end()..];
    }
    if !options.include_www {
        if let Some(www) = WWW_PREFIX.find(domain) {
            domain = &domain[www.end()..];
        }
    }

    let trimmed = domain.trim_end_matches(DOMAIN_TRAILING_PUNCTUATION);
    let host = trimmed
        .find(['/', ':', '?', '#'])
        .map_or(trimmed, |cut| &trimmed[..cut]);

    let labels: Vec<&str> = host.split('.').collect();
    if !has_valid_labels(&labels) || is_file_extension(&labels) {
        return None;
    }

    let folded = if !options.include_subdomains && labels.len() > 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host.to_string()
    };

    Some(folded.to_ascii_lowercase())
}

/// At least two labels, each made of alphanumerics and inner hyphens, ending
/// in an alphabetic TLD of two or more letters.
fn has_valid_labels(labels: &[&str]) -> bool {
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    });

    labels_ok && labels.last().is_some_and(|tld| has_valid_tld(tld))
}

pub fn has_valid_tld(tld: &str) -> bool {
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_file_extension(labels: &[&str]) -> bool {
    labels.last().is_some_and(|tld| {
        FILE_EXTENSIONS
            .iter()
            .any(|ext| tld.eq_ignore_ascii_case(ext))
    })
}

/// Structural check for a single, already isolated token.
///
/// Looser than the extraction rules: no TLD or file-extension check, but at
/// least one dot is required.
pub fn is_valid_domain(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.contains('.') && DOMAIN_STRUCTURE.is_match(candidate)
}

/// Dedup (keeping first-seen order), then sort, as the options ask.
pub(crate) fn order(mut items: Vec<String>, options: &ExtractionOptions) -> Vec<String> {
    if options.remove_duplicates {
        let mut seen = HashSet::with_capacity(items.len());
        items.retain(|item| seen.insert(item.clone()));
    }
    if options.sort_results {
        items.sort();
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ExtractionOptions {
        ExtractionOptions::default()
    }

    #[test]
    fn strips_scheme_www_and_path() {
        let domains = extract_domains(
            "Visit https://www.Example.com/path?q=1 today",
            &defaults(),
        );
        assert_eq!(domains, vec!["example.com"]);
    }

    #[test]
    fn keeps_www_when_asked() {
        let opts = ExtractionOptions {
            include_www: true,
            ..defaults()
        };
        assert_eq!(extract_domains("www.google.com", &opts), vec!["www.google.com"]);
    }

    #[test]
    fn uppercase_scheme_is_stripped_but_uppercase_www_is_kept() {
        assert_eq!(
            extract_domains("HTTP://EXAMPLE.ORG", &defaults()),
            vec!["example.org"]
        );
        assert_eq!(
            extract_domains("HTTP://WWW.EXAMPLE.ORG", &defaults()),
            vec!["www.example.org"]
        );
    }

    #[test]
    fn skips_email_domains() {
        assert!(extract_domains("contact@example.com", &defaults()).is_empty());
        assert!(extract_domains("ops@mail.example.com", &defaults()).is_empty());
    }

    #[test]
    fn rejects_file_names() {
        assert!(extract_domains("see report.pdf and notes.docx", &defaults()).is_empty());
        assert!(extract_domains("IMAGE.PNG", &defaults()).is_empty());
    }

    #[test]
    fn folds_subdomains() {
        let opts = ExtractionOptions {
            include_subdomains: false,
            ..defaults()
        };
        assert_eq!(extract_domains("blog.example.com", &opts), vec!["example.com"]);
        assert_eq!(
            extract_domains("blog.example.com", &defaults()),
            vec!["blog.example.com"]
        );
    }

    #[test]
    fn folding_is_two_label_heuristic() {
        let opts = ExtractionOptions {
            include_subdomains: false,
            ..defaults()
        };
        assert_eq!(extract_domains("foo.co.uk", &opts), vec!["co.uk"]);
    }

    #[test]
    fn dedup_is_case_insensitive_and_order_preserving() {
        let opts = ExtractionOptions {
            sort_results: false,
            ..defaults()
        };
        let domains = extract_domains("zeta.io Alpha.com ZETA.io alpha.com", &opts);
        assert_eq!(domains, vec!["zeta.io", "alpha.com"]);
    }

    #[test]
    fn duplicates_kept_when_not_removed() {
        let opts = ExtractionOptions {
            remove_duplicates: false,
            ..defaults()
        };
        let domains = extract_domains("b.com a.com b.com", &opts);
        assert_eq!(domains, vec!["a.com", "b.com", "b.com"]);
    }

    #[test]
    fn empty_text_is_empty() {
        assert!(extract_domains("", &defaults()).is_empty());
    }

    #[test]
    fn is_valid_domain_structure() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("a.b.c"));
        assert!(is_valid_domain("report.pdf"));
        assert!(is_valid_domain("1.2"));
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("-bad.com"));
        assert!(!is_valid_domain("bad..com"));
        assert!(!is_valid_domain(&format!("{}.com", "a".repeat(64))));
        assert!(is_valid_domain(&format!("{}.com", "a".repeat(63))));
    }

    #[test]
    fn tld_must_be_alphabetic() {
        assert!(has_valid_tld("com"));
        assert!(!has_valid_tld("c"));
        assert!(!has_valid_tld("c0m"));
    }
}
