//! Compiled patterns shared by every extraction call.
//!
//! All patterns are ASCII-only on purpose where the grammar is ASCII
//! (`(?i-u)` for the schemes); a Unicode-aware `(?i)[a-z]` would also accept
//! characters such as the Kelvin sign.

use regex::Regex;
use std::sync::LazyLock;

/// Optional scheme, then one or more `label.` groups, then an alphabetic TLD.
///
/// The `host` group starts after the scheme. A `www.` prefix is just another
/// label here. Trailing-boundary checks happen in [`crate::scan`] since the
/// regex crate has no lookahead.
pub static DOMAIN_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?i-u:https?|ftps?)://)?(?P<host>(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,})",
    )
    .expect("domain candidate pattern compiles")
});

/// A scheme-prefixed run of URL characters that is not directly preceded by `@`.
/// Group 1 is the URL itself.
pub static URL_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[^@])((?i-u:https?|ftps?)://[^\s<>"{}|\\^`\[\]()]+)"#)
        .expect("url candidate pattern compiles")
});

pub static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i-u:https?|ftps?)://").expect("scheme prefix pattern compiles")
});

/// Lower-case only: `WWW.` is kept and later lower-cased with the rest.
pub static WWW_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^www\.").expect("www prefix pattern compiles"));

/// Dot-separated labels of 1-63 alphanumerics/hyphens with no hyphen at either end.
pub static DOMAIN_STRUCTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("domain structure pattern compiles")
});

/// Characters stripped from the end of a domain candidate.
pub const DOMAIN_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

/// Characters stripped from the end of a URL candidate.
pub const URL_TRAILING_PUNCTUATION: &[char] =
    &['.', ',', ';', ':', '!', '?', ')', ']', '}', '>'];

/// TLD-looking suffixes that are really file extensions.
pub const FILE_EXTENSIONS: &[&str] = &[
    "txt", "pdf", "doc", "docx", "jpg", "png", "gif", "zip", "exe", "mp3", "mp4", "avi", "csv",
    "xlsx", "ppt",
];
