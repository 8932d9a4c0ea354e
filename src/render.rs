//! HTML output writers.
//!
//! [`HtmlWriter`] turns line events into HTML lines on any [`io::Write`].
//! [`DocumentRenderer`] drives a whole page through it: head, body lines
//! as they arrive, tail. Nothing is buffered beyond the current line, so
//! arbitrarily large inputs convert in one pass.

use std::io::{self, Write};

use crate::block::{split_lines, LineEvent, LineParser};
use crate::metadata::Metadata;
use crate::shell::{render_head, render_tail};
use crate::Mode;

/// Line-oriented HTML writer.
///
/// # Example
/// ```
/// use go_go_web::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.paragraph("Hello").unwrap();
/// writer.blank().unwrap();
/// assert_eq!(writer.into_string(), "<p>Hello</p>\n\n");
/// ```
pub struct HtmlWriter<W: Write> {
    out: W,
    lines: usize,
}

impl HtmlWriter<Vec<u8>> {
    /// Create an in-memory writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::from_writer(Vec::with_capacity(1024))
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of the input for prose.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::from_writer(Vec::with_capacity(input_len + input_len / 4))
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: every write goes through `&str`, so the buffer is valid UTF-8
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: every write goes through `&str`, so the buffer is valid UTF-8
        unsafe { String::from_utf8_unchecked(self.out) }
    }
}

impl Default for HtmlWriter<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Wrap an existing writer.
    #[inline]
    pub fn from_writer(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write text without a line terminator.
    #[inline]
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) -> io::Result<()> {
        self.lines += 1;
        self.out.write_all(b"\n")
    }

    /// Write `s` followed by a newline.
    #[inline]
    pub fn line(&mut self, s: &str) -> io::Result<()> {
        self.write_str(s)?;
        self.newline()
    }

    /// Write an empty line.
    #[inline]
    pub fn blank(&mut self) -> io::Result<()> {
        self.newline()
    }

    /// Write `<p>{text}</p>` and a newline.
    #[inline]
    pub fn paragraph(&mut self, text: &str) -> io::Result<()> {
        self.write_str("<p>")?;
        self.write_str(text)?;
        self.write_str("</p>")?;
        self.newline()
    }

    /// Write the HTML line for one event.
    pub fn write_event(&mut self, event: &LineEvent<'_>) -> io::Result<()> {
        match event {
            LineEvent::FenceOpen => self.line("<pre>"),
            LineEvent::FenceClose => self.line("</pre>"),
            LineEvent::Code(text) => self.line(text),
            LineEvent::Paragraph(text) => self.paragraph(text),
            LineEvent::Blank => self.blank(),
        }
    }

    /// Number of newlines written so far.
    #[inline]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flush the underlying writer.
    #[inline]
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Get mutable reference to the underlying writer.
    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Unwrap the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// What a finished document looked like at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    /// Body lines consumed.
    pub lines: usize,
    /// The body ended inside a code fence that was never closed.
    pub unclosed_fence: bool,
}

/// Streams one document: head on creation, body line by line, tail on finish.
pub struct DocumentRenderer<W: Write> {
    writer: HtmlWriter<W>,
    parser: LineParser,
}

impl<W: Write> DocumentRenderer<W> {
    /// Write the head and prepare to receive body lines.
    pub fn begin(
        out: W,
        title: &str,
        metadata: &Metadata,
        stylesheet: &str,
        mode: Mode,
    ) -> io::Result<Self> {
        Self::with_parser(out, title, metadata, stylesheet, LineParser::new(mode))
    }

    /// Like [`DocumentRenderer::begin`], with a preconfigured parser.
    pub fn with_parser(
        out: W,
        title: &str,
        metadata: &Metadata,
        stylesheet: &str,
        parser: LineParser,
    ) -> io::Result<Self> {
        let mut writer = HtmlWriter::from_writer(out);
        for line in render_head(title, metadata, stylesheet) {
            writer.line(&line)?;
        }
        Ok(Self { writer, parser })
    }

    /// Convert and write one raw body line.
    #[inline]
    pub fn push_line(&mut self, raw: &str) -> io::Result<()> {
        let event = self.parser.next_event(raw);
        self.writer.write_event(&event)
    }

    /// Convert and write every line of `body`.
    pub fn push_str(&mut self, body: &str) -> io::Result<()> {
        split_lines(body).try_for_each(|line| self.push_line(line))
    }

    /// Whether the body so far has left a code fence open.
    pub fn in_code_fence(&self) -> bool {
        self.parser.in_code_fence()
    }

    /// Write the tail, flush, and hand back the writer.
    ///
    /// The final `</html>` carries no trailing newline.
    pub fn finish(mut self) -> io::Result<(W, RenderSummary)> {
        let [body_close, html_close] = render_tail();
        self.writer.line(body_close)?;
        self.writer.write_str(html_close)?;
        self.writer.flush()?;

        let summary = RenderSummary {
            lines: self.parser.lines(),
            unclosed_fence: self.parser.in_code_fence(),
        };
        Ok((self.writer.into_inner(), summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_write_events() {
        let mut writer = HtmlWriter::new();
        for event in [
            LineEvent::FenceOpen,
            LineEvent::Code("let x = 1;"),
            LineEvent::FenceClose,
            LineEvent::Paragraph(Cow::Borrowed("<hr />")),
            LineEvent::Blank,
        ] {
            writer.write_event(&event).unwrap();
        }
        assert_eq!(writer.lines(), 5);
        assert_eq!(
            writer.as_str(),
            "<pre>\nlet x = 1;\n</pre>\n<p><hr /></p>\n\n"
        );
    }

    #[test]
    fn test_document_renderer() {
        let mut doc =
            DocumentRenderer::begin(Vec::new(), "test", &Metadata::new(), "", Mode::PlainText)
                .unwrap();
        doc.push_str("Hello\n").unwrap();
        let (out, summary) = doc.finish().unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.ends_with("<body>\n<p>Hello</p>\n</body>\n</html>"));
        assert_eq!(summary.lines, 1);
        assert!(!summary.unclosed_fence);
    }

    #[test]
    fn test_unclosed_fence_summary() {
        let mut doc =
            DocumentRenderer::begin(Vec::new(), "t", &Metadata::new(), "", Mode::Markdown).unwrap();
        doc.push_str("```\nfn main() {}\n").unwrap();
        assert!(doc.in_code_fence());
        let (out, summary) = doc.finish().unwrap();
        assert!(summary.unclosed_fence);
        assert!(String::from_utf8(out).unwrap().contains("<pre>\nfn main() {}\n</body>"));
    }
}
