//! Code fence detection.
//!
//! Opening and closing fences are recognised differently: anything may
//! follow the backticks of an opening fence (an info string, even more
//! text), while a closing fence is backticks and trailing spaces only.

/// Whether the scanner is inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    /// Regular Markdown text.
    #[default]
    Outside,
    /// Between an opening and a closing fence line.
    Inside,
}

impl FenceState {
    /// `true` for [`FenceState::Inside`].
    #[inline]
    pub fn is_inside(self) -> bool {
        self == FenceState::Inside
    }
}

/// Spaces, three backticks, then anything.
pub fn is_fence_open(line: &str) -> bool {
    line.trim_start_matches(' ').starts_with("```")
}

/// Spaces, three or more backticks, then spaces only.
pub fn is_fence_close(line: &str) -> bool {
    let rest = line.trim_start_matches(' ');
    let ticks = rest.bytes().take_while(|&b| b == b'`').count();
    ticks >= 3 && rest.as_bytes()[ticks..].iter().all(|&b| b == b' ')
}
