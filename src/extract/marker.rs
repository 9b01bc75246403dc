//! `<%_ ... _%>` marker scanning for underscore-style templates.
//!
//! Marker bodies are rewritten into `_("""...""")` statements so the regular
//! keyword extraction picks them up as translatable strings.

use std::{collections::HashSet, fmt, path::Path, sync::LazyLock};

use regex::Regex;

use super::Extract;

/// Leftmost, non-greedy and spanning newlines. A nested `_%>` closes the
/// enclosing marker.
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<%_(.*?)_%>").unwrap());

/// A marker body escaped for a double-quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractableUnit {
    escaped: String,
}

impl ExtractableUnit {
    pub fn new(body: &str) -> Self {
        Self {
            escaped: escape(body),
        }
    }

    pub fn escaped(&self) -> &str {
        &self.escaped
    }

    /// The original marker body.
    pub fn body(&self) -> String {
        unescape(&self.escaped)
    }
}

impl fmt::Display for ExtractableUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_(\"\"\"{}\"\"\")", self.escaped)
    }
}

/// Escape backslashes first, then double quotes.
pub fn escape(body: &str) -> String {
    body.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Inverse of [`escape`].
pub fn unescape(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('\\' | '"')) => out.push(next),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Unique marker bodies in order of first appearance.
pub fn find_markers(source: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    MARKER_REGEX
        .captures_iter(source)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|body| seen.insert(*body))
        .collect()
}

pub fn extract_units(source: &str) -> Vec<ExtractableUnit> {
    find_markers(source)
        .into_iter()
        .map(ExtractableUnit::new)
        .collect()
}

/// Rewrites marker bodies into extraction statements, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerExtractor;

impl Extract for MarkerExtractor {
    fn extract(&self, source: &str, _origin: &Path) -> String {
        extract_units(source)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
