//! Keyword extraction over the canonical call form.
//!
//! Finds `_("...")`, `gettext("...")` and friends whose first argument is a
//! string literal, and returns the literal's value as a msgid.

use std::sync::LazyLock;

use regex::Regex;

static CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:_|gettext|gettext_lazy|gettext_noop|ugettext|ugettext_lazy)\s*\(\s*[uU]?")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedMessage {
    pub msgid: String,
    /// 1-based line of the call in the scanned text.
    pub line: usize,
}

/// Collect the msgid of every keyword call with a literal first argument.
///
/// Calls whose argument is not a complete string literal are skipped.
pub fn collect_messages(text: &str) -> Vec<CollectedMessage> {
    let mut messages = Vec::new();
    let mut resume_at = 0;

    for call in CALL_REGEX.find_iter(text) {
        if call.start() < resume_at {
            continue;
        }
        let Some((raw, consumed)) = read_string_literal(&text[call.end()..]) else {
            continue;
        };
        resume_at = call.end() + consumed;

        let msgid = unescape_literal(raw);
        if msgid.is_empty() {
            continue;
        }
        messages.push(CollectedMessage {
            msgid,
            line: line_of(text, call.start()),
        });
    }

    messages
}

/// Read a quoted literal at the start of `input`.
///
/// Returns the raw content between the quotes and the number of bytes
/// consumed including the quotes.
fn read_string_literal(input: &str) -> Option<(&str, usize)> {
    let quote = ["\"\"\"", "'''", "\"", "'"]
        .into_iter()
        .find(|q| input.starts_with(q))?;
    let body_start = quote.len();
    let body = &input[body_start..];

    let mut escaped = false;
    for (idx, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if quote.len() == 1 && c == '\n' {
            return None;
        }
        if body[idx..].starts_with(quote) {
            return Some((&body[..idx], body_start + idx + quote.len()));
        }
    }
    None
}

fn unescape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(next @ ('\\' | '"' | '\'')) => out.push(next),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
