//! Line-level event types.

use std::borrow::Cow;

/// One classified output line.
///
/// Every input line produces exactly one event, so a rendered body has the
/// same number of lines as its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// Opening fence line, rendered as `<pre>`.
    FenceOpen,
    /// Closing fence line, rendered as `</pre>`.
    FenceClose,
    /// Verbatim line inside a code fence.
    Code(&'a str),
    /// Paragraph content, already rewritten by the inline rules.
    Paragraph(Cow<'a, str>),
    /// Empty line, rendered as an empty output line.
    Blank,
}

impl LineEvent<'_> {
    /// Whether this event renders as an empty line.
    pub fn is_blank(&self) -> bool {
        matches!(self, LineEvent::Blank)
    }
}
