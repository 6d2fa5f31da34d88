pub mod api;
pub mod args;
pub mod batch;
pub mod config;
pub mod domain;
pub mod export;
pub mod extract;
pub mod format;
pub mod options;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod stats;
pub mod urls;
pub mod utils;

pub use args::Args;
pub use domain::{extract_domains, is_valid_domain};
pub use extract::extract_all;
pub use format::{format_results, OutputFormat};
pub use options::{ExtractionOptions, PartialExtractionOptions};
pub use stats::{ExtractionResult, Statistics};
pub use urls::extract_urls;
