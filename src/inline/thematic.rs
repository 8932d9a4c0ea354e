//! Horizontal rule detection.

use std::borrow::Cow;

/// Replace a whole-line run of three or more hyphens with `<hr />`.
///
/// Only ASCII spaces may pad the hyphens; anything else leaves the line alone.
pub fn rewrite_thematic_break(line: &str) -> Cow<'_, str> {
    if is_thematic_break(line) {
        Cow::Owned("<hr />".to_owned())
    } else {
        Cow::Borrowed(line)
    }
}

/// Whether `line` is spaces, at least three hyphens, then spaces.
pub fn is_thematic_break(line: &str) -> bool {
    let rule = line.trim_matches(' ');
    rule.len() >= 3 && rule.bytes().all(|b| b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_or_more_hyphens() {
        assert!(is_thematic_break("---"));
        assert!(is_thematic_break("  -------  "));
        assert!(!is_thematic_break("--"));
        assert!(!is_thematic_break("- - -"));
        assert!(!is_thematic_break("---a"));
        assert!(!is_thematic_break("\t---"));
    }

    #[test]
    fn rewrite_replaces_whole_line() {
        assert_eq!(rewrite_thematic_break(" ---- "), "<hr />");
        assert_eq!(rewrite_thematic_break("text"), "text");
    }
}
