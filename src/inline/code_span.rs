//! Inline code rule.
//!
//! The span runs from the first backtick on the line to the last one, so a
//! line holds at most one code span and any backticks in between end up
//! inside it.

use std::borrow::Cow;

use memchr::{memchr, memrchr};

/// Rewrite `` `text` `` into `<code>text</code>`.
pub fn rewrite_code_span(line: &str) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let Some(open) = memchr(b'`', bytes) else {
        return Cow::Borrowed(line);
    };
    let close = match memrchr(b'`', bytes) {
        Some(close) if close > open => close,
        _ => return Cow::Borrowed(line),
    };

    let mut out = String::with_capacity(line.len() + 13);
    out.push_str(&line[..open]);
    out.push_str("<code>");
    out.push_str(&line[open + 1..close]);
    out.push_str("</code>");
    out.push_str(&line[close + 1..]);
    Cow::Owned(out)
}
