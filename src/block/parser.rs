//! Per-document line parser.

use tracing::debug;

use crate::inline::{Rule, RuleChain};
use crate::Mode;

use super::event::LineEvent;
use super::fence::{is_fence_close, is_fence_open, FenceState};
use super::lines::split_lines;

/// Classify one Markdown line given the current fence state.
///
/// The line is trimmed first. Outside a fence an opening fence wins over
/// every inline rule; inside a fence only a closing fence is recognised and
/// all other lines pass through verbatim.
pub fn transform_line<'a>(
    raw: &'a str,
    state: FenceState,
    rules: &RuleChain,
) -> (LineEvent<'a>, FenceState) {
    let line = raw.trim();
    match state {
        FenceState::Outside if is_fence_open(line) => (LineEvent::FenceOpen, FenceState::Inside),
        FenceState::Outside if line.is_empty() => (LineEvent::Blank, state),
        FenceState::Outside => (LineEvent::Paragraph(rules.apply(line)), state),
        FenceState::Inside if is_fence_close(line) => (LineEvent::FenceClose, FenceState::Outside),
        FenceState::Inside if line.is_empty() => (LineEvent::Blank, state),
        FenceState::Inside => (LineEvent::Code(line), state),
    }
}

/// Classify one plain-text line: trimmed text becomes a paragraph verbatim.
pub fn transform_plain_line(raw: &str) -> LineEvent<'_> {
    let line = raw.trim();
    if line.is_empty() {
        LineEvent::Blank
    } else {
        LineEvent::Paragraph(line.into())
    }
}

/// Line parser state for a single document.
///
/// The fence flag lives here and nowhere else; a fresh parser starts
/// outside any fence, and nothing resets it except fence lines.
#[derive(Debug, Clone)]
pub struct LineParser {
    mode: Mode,
    rules: RuleChain,
    fence: FenceState,
    lines: usize,
}

impl LineParser {
    /// Create a parser with the default rules for `mode`.
    pub fn new(mode: Mode) -> Self {
        let rules = match mode {
            Mode::Markdown => RuleChain::markdown(),
            Mode::PlainText => RuleChain::empty(),
        };
        Self::with_rules(mode, rules)
    }

    /// Create a parser with a custom rule chain.
    ///
    /// The chain only matters in [`Mode::Markdown`].
    pub fn with_rules(mode: Mode, rules: RuleChain) -> Self {
        debug!(
            ?mode,
            rules = ?rules.rules().iter().map(Rule::name).collect::<Vec<_>>(),
            "line parser ready"
        );
        Self {
            mode,
            rules,
            fence: FenceState::Outside,
            lines: 0,
        }
    }

    /// Consume one raw input line and produce its event.
    pub fn next_event<'a>(&mut self, raw: &'a str) -> LineEvent<'a> {
        self.lines += 1;
        match self.mode {
            Mode::PlainText => transform_plain_line(raw),
            Mode::Markdown => {
                let (event, fence) = transform_line(raw, self.fence, &self.rules);
                self.fence = fence;
                event
            }
        }
    }

    /// Parse every line of `input` and collect the events.
    pub fn parse<'a>(&mut self, input: &'a str, events: &mut Vec<LineEvent<'a>>) {
        events.extend(split_lines(input).map(|line| self.next_event(line)));
    }

    /// Whether the last line seen left the parser inside a code fence.
    ///
    /// At end of input this reports an unterminated fence; that is not an
    /// error, the output simply ends without `</pre>`.
    pub fn in_code_fence(&self) -> bool {
        self.fence.is_inside()
    }

    /// Current fence state.
    pub fn fence_state(&self) -> FenceState {
        self.fence
    }

    /// Number of lines consumed so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Parser mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }
}
