//! Emphasis and strong emphasis scanners.
//!
//! Both scanners walk the line left to right with `memchr`, rewrite every
//! non-overlapping match they find, and resume scanning right after the
//! closing delimiter of the previous rewrite. A delimiter consumed by one
//! rewrite can never take part in the next one.

use std::borrow::Cow;

use memchr::memchr;

/// Rewrite `<guard>m<text>m` into `<em>text</em>`.
///
/// The guard is the character in front of the opening delimiter. It must
/// exist (a delimiter at the very start of the unscanned text never opens a
/// span) and must not be the delimiter itself. `keep_guard` decides whether
/// the guard survives the rewrite or is swallowed with the span.
pub fn rewrite_emphasis(line: &str, marker: u8, keep_guard: bool) -> Cow<'_, str> {
    debug_assert!(marker.is_ascii());
    let bytes = line.as_bytes();
    let mut out: Option<String> = None;
    // Start of text that has not been copied to `out` yet.
    let mut copied = 0;
    let mut search = 0;

    while let Some(offset) = memchr(marker, &bytes[search..]) {
        let open = search + offset;
        search = open + 1;

        let Some((guard_start, guard)) = guard_before(line, copied, open) else {
            continue;
        };
        if guard == marker as char {
            continue;
        }

        // At least one non-delimiter byte, then the closing delimiter.
        let close = match memchr(marker, &bytes[open + 1..]) {
            Some(0) | None => continue,
            Some(len) => open + 1 + len,
        };

        let buf = out.get_or_insert_with(|| String::with_capacity(line.len() + 16));
        buf.push_str(&line[copied..guard_start]);
        if keep_guard {
            buf.push(guard);
        }
        buf.push_str("<em>");
        buf.push_str(&line[open + 1..close]);
        buf.push_str("</em>");

        copied = close + 1;
        search = copied;
    }

    finish(line, out, copied)
}

/// Rewrite `mm<text>mm` into `<strong>text</strong>`.
pub fn rewrite_strong(line: &str, marker: u8) -> Cow<'_, str> {
    debug_assert!(marker.is_ascii());
    let bytes = line.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut search = 0;

    while let Some(offset) = memchr(marker, &bytes[search..]) {
        let open = search + offset;
        search = open + 1;

        if bytes.get(open + 1) != Some(&marker) {
            continue;
        }
        let content = open + 2;
        match bytes.get(content) {
            Some(&b) if b != marker => {}
            _ => continue,
        }

        // The content run stops at the first delimiter, which must be doubled.
        let Some(len) = memchr(marker, &bytes[content..]) else {
            continue;
        };
        let close = content + len;
        if bytes.get(close + 1) != Some(&marker) {
            continue;
        }

        let buf = out.get_or_insert_with(|| String::with_capacity(line.len() + 32));
        buf.push_str(&line[copied..open]);
        buf.push_str("<strong>");
        buf.push_str(&line[content..close]);
        buf.push_str("</strong>");

        copied = close + 2;
        search = copied;
    }

    finish(line, out, copied)
}

/// The character ending right before `pos`, if it lies in `line[floor..pos]`.
#[inline]
fn guard_before(line: &str, floor: usize, pos: usize) -> Option<(usize, char)> {
    if pos <= floor {
        return None;
    }
    line[floor..pos]
        .char_indices()
        .next_back()
        .map(|(idx, ch)| (floor + idx, ch))
}

#[inline]
fn finish(line: &str, out: Option<String>, copied: usize) -> Cow<'_, str> {
    match out {
        Some(mut buf) => {
            buf.push_str(&line[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(line),
    }
}
