use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_domains: usize,
    pub total_urls: usize,
    pub unique_domains: usize,
    pub domain_occurrences: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub domains: Vec<String>,
    pub urls: Vec<String>,
    pub statistics: Statistics,
}

impl Statistics {
    pub fn compute(text: &str, domains: &[String], urls: &[String]) -> Self {
        let domain_occurrences = count_occurrences(text, domains);
        Self {
            total_domains: domains.len(),
            total_urls: urls.len(),
            unique_domains: domains.len(),
            domain_occurrences,
        }
    }

    /// Domains ordered by occurrence count, most frequent first, ties by name.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .domain_occurrences
            .iter()
            .map(|(domain, count)| (domain.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Case-insensitive, non-overlapping substring counts of each domain in `text`.
///
/// Occurrences inside URLs and email addresses count too.
pub fn count_occurrences(text: &str, domains: &[String]) -> BTreeMap<String, usize> {
    let haystack = text.to_lowercase();
    domains
        .iter()
        .map(|domain| {
            let needle = domain.to_lowercase();
            (domain.clone(), haystack.matches(needle.as_str()).count())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_raw_substrings_including_emails_and_urls() {
        let text = "Example.com, https://example.com/a and bob@EXAMPLE.COM";
        let counts = count_occurrences(text, &["example.com".to_string()]);
        assert_eq!(counts["example.com"], 3);
    }

    #[test]
    fn dot_is_literal() {
        let counts = count_occurrences("exampleXcom example.com", &["example.com".to_string()]);
        assert_eq!(counts["example.com"], 1);
    }

    #[test]
    fn unique_domains_follows_list_length() {
        let domains = vec!["a.com".to_string(), "a.com".to_string(), "b.com".to_string()];
        let stats = Statistics::compute("a.com a.com b.com", &domains, &[]);
        assert_eq!(stats.total_domains, 3);
        assert_eq!(stats.unique_domains, 3);
        assert_eq!(stats.domain_occurrences.len(), 2);
        assert_eq!(stats.domain_occurrences["a.com"], 2);
    }

    #[test]
    fn ranked_orders_by_count_then_name() {
        let domains = vec!["b.com".to_string(), "a.com".to_string(), "c.com".to_string()];
        let stats = Statistics::compute("c.com b.com a.com c.com", &domains, &[]);
        assert_eq!(stats.ranked(), vec![("c.com", 2), ("a.com", 1), ("b.com", 1)]);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let result = ExtractionResult::default();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["statistics"]["totalDomains"], 0);
        assert!(json["statistics"]["domainOccurrences"].is_object());
    }
}
