//! Inline substitution rules for Markdown lines.
//!
//! A line outside a code fence is rewritten by an ordered [`RuleChain`]:
//! 1. Italic (`*text*`, then `_text_`)
//! 2. Bold (`**text**`, then `__text__`)
//! 3. Horizontal rule (`---`)
//! 4. Inline code (`` `text` ``)
//!
//! Every rule sees the output of the rules before it. The order is part of
//! the observable behavior: italic runs first, so `**a** b*c*` and similar
//! mixtures resolve differently than a CommonMark parser would resolve them.

mod code_span;
mod emphasis;
mod thematic;

use std::borrow::Cow;

use smallvec::SmallVec;

pub use code_span::rewrite_code_span;
pub use emphasis::{rewrite_emphasis, rewrite_strong};
pub use thematic::{is_thematic_break, rewrite_thematic_break};

/// A single substitution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `<guard>m<text>m` to `<em>text</em>`.
    Emphasis {
        /// Delimiter byte (`*` or `_`).
        marker: u8,
        /// Whether the guard character in front of the span is preserved.
        keep_guard: bool,
    },
    /// `mm<text>mm` to `<strong>text</strong>`.
    Strong {
        /// Delimiter byte (`*` or `_`).
        marker: u8,
    },
    /// A line of hyphens to `<hr />`.
    ThematicBreak,
    /// `` `text` `` to `<code>text</code>`.
    CodeSpan,
}

impl Rule {
    /// `*text*`, keeping the guard character.
    pub const ITALIC_ASTERISK: Rule = Rule::Emphasis {
        marker: b'*',
        keep_guard: true,
    };
    /// `_text_`, swallowing the guard character.
    pub const ITALIC_UNDERSCORE: Rule = Rule::Emphasis {
        marker: b'_',
        keep_guard: false,
    };
    /// `**text**`.
    pub const BOLD_ASTERISK: Rule = Rule::Strong { marker: b'*' };
    /// `__text__`.
    pub const BOLD_UNDERSCORE: Rule = Rule::Strong { marker: b'_' };

    /// Apply the rule to a line. Returns the line borrowed when nothing matched.
    #[inline]
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match *self {
            Rule::Emphasis { marker, keep_guard } => rewrite_emphasis(line, marker, keep_guard),
            Rule::Strong { marker } => rewrite_strong(line, marker),
            Rule::ThematicBreak => rewrite_thematic_break(line),
            Rule::CodeSpan => rewrite_code_span(line),
        }
    }

    /// Short name, used in logs.
    pub fn name(&self) -> &'static str {
        match *self {
            Rule::Emphasis { marker: b'*', .. } => "italic-asterisk",
            Rule::Emphasis { marker: b'_', .. } => "italic-underscore",
            Rule::Emphasis { .. } => "italic",
            Rule::Strong { marker: b'*' } => "bold-asterisk",
            Rule::Strong { marker: b'_' } => "bold-underscore",
            Rule::Strong { .. } => "bold",
            Rule::ThematicBreak => "horizontal-rule",
            Rule::CodeSpan => "inline-code",
        }
    }
}

/// Ordered list of rules applied to one line at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleChain {
    rules: SmallVec<[Rule; 8]>,
}

impl RuleChain {
    /// The Markdown rule order.
    pub fn markdown() -> Self {
        Self::empty()
            .with(Rule::ITALIC_ASTERISK)
            .with(Rule::ITALIC_UNDERSCORE)
            .with(Rule::BOLD_ASTERISK)
            .with(Rule::BOLD_UNDERSCORE)
            .with(Rule::ThematicBreak)
            .with(Rule::CodeSpan)
    }

    /// A chain that leaves every line untouched.
    pub fn empty() -> Self {
        Self {
            rules: SmallVec::new(),
        }
    }

    /// Append a rule at the end of the chain.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules, in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule over `line`, feeding each the previous rule's output.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(line);
        for rule in &self.rules {
            let rewritten = match rule.apply(&current) {
                Cow::Owned(text) => Some(text),
                Cow::Borrowed(_) => None,
            };
            if let Some(text) = rewritten {
                current = Cow::Owned(text);
            }
        }
        current
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::markdown()
    }
}
