//! go-go-web: plain text and lightweight Markdown to standalone HTML pages.
//!
//! Each input file becomes one HTML5 document: a fixed head (language,
//! title, optional keywords/description, optional stylesheet link), the
//! converted body, and a fixed tail.
//!
//! # Conversion model
//! - Line in, line out: every source line yields exactly one HTML line
//! - One bit of state: whether the scanner is inside a ```` ``` ```` fence
//! - Ordered inline rules: italic, bold, horizontal rule, inline code
//! - No escaping: text and metadata are copied into the page verbatim
//!
//! This is deliberately not CommonMark. There are no lists, links, headings
//! or nested inline styles, and the inline rules keep their historical
//! quirks (see [`inline`]).

pub mod block;
pub mod config;
pub mod convert;
pub mod error;
pub mod front_matter;
pub mod inline;
pub mod metadata;
pub mod output_dir;
pub mod render;
pub mod shell;

use std::io::{self, Write};

// Re-export primary types
pub use block::{LineEvent, LineParser};
pub use config::{CliSettings, ConfigError, Settings};
pub use convert::{Converted, Converter, Report};
pub use error::{Error, Result};
pub use inline::{Rule, RuleChain};
pub use metadata::Metadata;
pub use render::{DocumentRenderer, HtmlWriter, RenderSummary};
pub use shell::{render_head, render_tail};

/// How a document body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fences, inline rules, paragraphs.
    Markdown,
    /// Paragraphs only.
    PlainText,
}

/// A document ready to render.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    /// Fallback title, usually the input file's base name.
    pub title: &'a str,
    /// Front matter metadata; empty for plain text.
    pub metadata: &'a Metadata,
    /// Body text, front matter already removed.
    pub body: &'a str,
    /// Body interpretation.
    pub mode: Mode,
}

/// Convert a body to HTML lines, without the document shell.
///
/// # Example
/// ```
/// use go_go_web::{to_html, Mode};
///
/// let html = to_html("Hello\n---\n**Bold**\n", Mode::Markdown);
/// assert_eq!(html, "<p>Hello</p>\n<p><hr /></p>\n<p><strong>Bold</strong></p>\n");
/// ```
pub fn to_html(input: &str, mode: Mode) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut parser = LineParser::new(mode);
    for line in block::split_lines(input) {
        let event = parser.next_event(line);
        // Writing into a Vec cannot fail.
        let _ = writer.write_event(&event);
    }
    writer.into_string()
}

/// Render a complete page into `out`.
pub fn render_document<W: Write>(
    out: W,
    document: &Document<'_>,
    stylesheet: &str,
) -> io::Result<RenderSummary> {
    let mut renderer = DocumentRenderer::begin(
        out,
        document.title,
        document.metadata,
        stylesheet,
        document.mode,
    )?;
    renderer.push_str(document.body)?;
    let (_, summary) = renderer.finish()?;
    Ok(summary)
}

/// Render a complete page into a `String`.
pub fn document_to_string(document: &Document<'_>, stylesheet: &str) -> String {
    let mut out = Vec::with_capacity(document.body.len() + 512);
    // Writing into a Vec cannot fail.
    let _ = render_document(&mut out, document, stylesheet);
    // SAFETY: the renderer only writes `&str` data
    unsafe { String::from_utf8_unchecked(out) }
}
