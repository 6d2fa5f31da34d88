//! Raw candidate scanning.
//!
//! Both scanners walk the text left to right and report spans into the
//! original text, so callers can inspect the surrounding characters.

use crate::patterns::{DOMAIN_CANDIDATE, URL_CANDIDATE};

/// A raw match before any validation or normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

impl<'t> Candidate<'t> {
    fn new(haystack: &'t str, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: &haystack[start..end],
        }
    }

    /// The character immediately before the match in the original text.
    pub fn preceding_char(&self, haystack: &str) -> Option<char> {
        haystack[..self.start].chars().next_back()
    }
}

/// Iterator over domain-like candidates.
///
/// A match must end on a boundary: end of text, whitespace, a character
/// outside `[A-Za-z0-9_.-]`, or a `.` followed by a character that is not an
/// ASCII letter. A `.` that ends the text is not a boundary.
/// When the greedy match does not end on a boundary, fewer labels are tried at
/// the same start before moving one character forward.
pub struct DomainCandidates<'t> {
    text: &'t str,
    pos: usize,
}

pub fn domain_candidates(text: &str) -> DomainCandidates<'_> {
    DomainCandidates { text, pos: 0 }
}

impl<'t> Iterator for DomainCandidates<'t> {
    type Item = Candidate<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let caps = DOMAIN_CANDIDATE.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            let host = caps.name("host")?;

            if let Some(end) = shortest_bounded_end(self.text, host.start(), host.end()) {
                self.pos = end;
                return Some(Candidate::new(self.text, whole.start(), end));
            }

            // Matches always begin on an ASCII byte, so +1 stays on a char boundary.
            self.pos = whole.start() + 1;
        }
        None
    }
}

/// Pick where a host match may end, preferring the most labels.
///
/// `host_start..host_end` is the greedy `label.label...tld` match. Dropping
/// trailing labels only helps when the new TLD is alphabetic and the dot after
/// it is followed by a non-letter.
fn shortest_bounded_end(text: &str, host_start: usize, host_end: usize) -> Option<usize> {
    if ends_on_boundary(text, host_end) {
        return Some(host_end);
    }

    let host = &text[host_start..host_end];
    let mut segment_ends: Vec<usize> = host.match_indices('.').map(|(i, _)| i).collect();
    // The last segment is the greedy TLD, already rejected above.
    segment_ends.reverse();

    for (idx, &dot) in segment_ends.iter().enumerate() {
        let seg_start = segment_ends.get(idx + 1).map_or(0, |prev| prev + 1);
        if seg_start == 0 {
            // A TLD needs at least one label in front of it.
            break;
        }
        let tld = &host[seg_start..dot];
        let next_is_letter = host[dot + 1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) && !next_is_letter {
            return Some(host_start + dot);
        }
    }
    None
}

fn ends_on_boundary(text: &str, end: usize) -> bool {
    let mut rest = text[end..].chars();
    match rest.next() {
        None => true,
        Some('.') => rest.next().is_some_and(|c| !c.is_ascii_alphabetic()),
        Some(c) if c.is_whitespace() => true,
        Some(c) => !(c.is_ascii_alphanumeric() || c == '_' || c == '-'),
    }
}

/// All scheme-prefixed URL candidates, excluding those directly after `@`.
pub fn url_candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    URL_CANDIDATE
        .captures_iter(text)
        .filter_map(move |caps| caps.get(1))
        .map(move |m| Candidate::new(text, m.start(), m.end()))
}
