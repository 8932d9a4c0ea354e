//! Line splitting.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very end
//! of the input does not start another, empty line.

use memchr::memchr2;

/// Iterator over the lines of a string, terminators removed.
///
/// # Example
/// ```
/// use go_go_web::block::split_lines;
///
/// let lines: Vec<_> = split_lines("a\r\nb\rc\n").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Split `input` into lines.
#[inline]
pub fn split_lines(input: &str) -> Lines<'_> {
    Lines { rest: input }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let (line, rest) = match memchr2(b'\n', b'\r', bytes) {
            None => (self.rest, ""),
            Some(end) => {
                let skip = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                (&self.rest[..end], &self.rest[end + skip..])
            }
        };
        self.rest = rest;
        Some(line)
    }
}
