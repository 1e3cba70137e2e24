//! Header matcher - maps noisy source headers to canonical field names
//!
//! Rules are kept as an explicit ordered table. The first rule whose pattern
//! matches the cleaned header wins, so a specific alias (e.g. `CHAINAGE END`)
//! must be listed before a general substring rule (e.g. `CHAINAGE`).

use std::collections::HashSet;
use tracing::debug;

/// Pattern tested against a cleaned (trimmed, single-line, uppercase) header.
/// Tokens are written in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPattern {
    /// Header equals one of the tokens
    Exact(&'static [&'static str]),
    /// Header contains every token
    ContainsAll(&'static [&'static str]),
    /// Header contains at least one token
    ContainsAny(&'static [&'static str]),
}

impl HeaderPattern {
    pub fn matches(&self, cleaned: &str) -> bool {
        match self {
            HeaderPattern::Exact(tokens) => tokens.iter().any(|t| cleaned == *t),
            HeaderPattern::ContainsAll(tokens) => tokens.iter().all(|t| cleaned.contains(t)),
            HeaderPattern::ContainsAny(tokens) => tokens.iter().any(|t| cleaned.contains(t)),
        }
    }
}

/// One row of a rule table: pattern => canonical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRule {
    pub pattern: HeaderPattern,
    pub field: &'static str,
}

impl HeaderRule {
    pub const fn new(pattern: HeaderPattern, field: &'static str) -> Self {
        Self { pattern, field }
    }
}

/// Trim, fold embedded line breaks into spaces, uppercase
pub fn clean_header(header: &str) -> String {
    header
        .trim()
        .replace(['\n', '\r'], " ")
        .trim()
        .to_uppercase()
}

/// Canonical field for a single header, or `None` when no rule matches
pub fn match_header(rules: &[HeaderRule], header: &str) -> Option<&'static str> {
    let cleaned = clean_header(header);
    rules
        .iter()
        .find(|rule| rule.pattern.matches(&cleaned))
        .map(|rule| rule.field)
}

/// Map every header of a table, in column order.
///
/// A canonical field is claimed by the first column that maps to it;
/// later columns resolving to the same field are left unmapped.
pub fn match_headers<S: AsRef<str>>(
    rules: &[HeaderRule],
    headers: &[S],
) -> Vec<Option<&'static str>> {
    let mut claimed: HashSet<&'static str> = HashSet::new();
    headers
        .iter()
        .map(|header| {
            let header = header.as_ref();
            match match_header(rules, header) {
                Some(field) if claimed.insert(field) => {
                    debug!(header, field, "header mapped");
                    Some(field)
                }
                Some(field) => {
                    debug!(header, field, "field already claimed, ignoring");
                    None
                }
                None => {
                    debug!(header, "header unmatched, dropping");
                    None
                }
            }
        })
        .collect()
}
