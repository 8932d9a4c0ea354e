//! Line-level scanning for Markdown and plain text.
//!
//! The scanner is line-oriented and stateful only across fence lines:
//! - Fenced code blocks (passed through verbatim)
//! - Blank lines
//! - Paragraph lines (rewritten by [`crate::inline::RuleChain`])
//!
//! Lines end at `\n`, `\r\n` or a lone `\r` (see [`split_lines`]).

mod event;
mod fence;
mod lines;
mod parser;

pub use event::LineEvent;
pub use fence::{is_fence_close, is_fence_open, FenceState};
pub use lines::{split_lines, Lines};
pub use parser::{transform_line, transform_plain_line, LineParser};
