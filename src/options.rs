use serde::{Deserialize, Serialize};

/// Knobs for a single extraction call.
///
/// `include_subdomains` and `include_www` only affect domain extraction;
/// URL extraction reads `remove_duplicates` and `sort_results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOptions {
    pub include_subdomains: bool,
    pub remove_duplicates: bool,
    pub include_www: bool,
    pub sort_results: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            include_subdomains: true,
            remove_duplicates: true,
            include_www: false,
            sort_results: true,
        }
    }
}

impl ExtractionOptions {
    /// Layer `overrides` on top of `self`, keeping every key the override leaves unset.
    pub fn merged(self, overrides: &PartialExtractionOptions) -> Self {
        Self {
            include_subdomains: overrides
                .include_subdomains
                .unwrap_or(self.include_subdomains),
            remove_duplicates: overrides
                .remove_duplicates
                .unwrap_or(self.remove_duplicates),
            include_www: overrides.include_www.unwrap_or(self.include_www),
            sort_results: overrides.sort_results.unwrap_or(self.sort_results),
        }
    }
}

/// Caller-supplied subset of [`ExtractionOptions`]. Absent keys fall back
/// to whatever they are merged over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialExtractionOptions {
    pub include_subdomains: Option<bool>,
    pub remove_duplicates: Option<bool>,
    pub include_www: Option<bool>,
    pub sort_results: Option<bool>,
}

impl PartialExtractionOptions {
    /// Combine two partials, `later` winning on every key it sets.
    pub fn or(self, later: PartialExtractionOptions) -> Self {
        Self {
            include_subdomains: later.include_subdomains.or(self.include_subdomains),
            remove_duplicates: later.remove_duplicates.or(self.remove_duplicates),
            include_www: later.include_www.or(self.include_www),
            sort_results: later.sort_results.or(self.sort_results),
        }
    }

    pub fn resolve(&self) -> ExtractionOptions {
        ExtractionOptions::default().merged(self)
    }
}
