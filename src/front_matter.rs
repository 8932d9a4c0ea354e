//! Front matter extraction.
//!
//! A front matter block sits at byte 0 of a Markdown file, fenced by `---`
//! (YAML) or `+++` (TOML) lines. The delimiter must be exactly three
//! characters; trailing spaces, tabs and `\r` on a delimiter line are
//! allowed. Without a matching closing delimiter the whole input is body.

use memchr::memchr;

use crate::metadata::{Metadata, KEYS};

/// Syntax of a front matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    /// `---` delimited YAML.
    Yaml,
    /// `+++` delimited TOML.
    Toml,
}

impl FrontMatterFormat {
    fn from_delimiter(line: &str) -> Option<Self> {
        match line {
            "---" => Some(Self::Yaml),
            "+++" => Some(Self::Toml),
            _ => None,
        }
    }

    fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// A raw front matter block, delimiters excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Block syntax.
    pub format: FrontMatterFormat,
    /// Text between the delimiter lines, including its final line ending.
    pub raw: &'a str,
}

/// Error parsing the contents of a front matter block.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// Invalid YAML.
    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Invalid TOML.
    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Split `input` into its front matter block (if any) and the body after it.
pub fn split(input: &str) -> (Option<FrontMatter<'_>>, &str) {
    let (first, mut pos) = next_line(input, 0);
    let Some(format) = FrontMatterFormat::from_delimiter(trim_delimiter(first)) else {
        return (None, input);
    };
    let content_start = pos;

    while pos < input.len() {
        let line_start = pos;
        let (line, next) = next_line(input, pos);
        if trim_delimiter(line) == format.delimiter() {
            let front = FrontMatter {
                format,
                raw: &input[content_start..line_start],
            };
            return (Some(front), &input[next..]);
        }
        pos = next;
    }

    (None, input)
}

/// Split `input` and parse its front matter into [`Metadata`].
///
/// Input without front matter yields empty metadata and the unchanged input.
pub fn extract(input: &str) -> Result<(Metadata, &str), FrontMatterError> {
    match split(input) {
        (Some(front), body) => Ok((front.metadata()?, body)),
        (None, body) => Ok((Metadata::new(), body)),
    }
}

impl FrontMatter<'_> {
    /// Parse the block and pick out the known metadata keys.
    ///
    /// Scalars are stringified, sequences of scalars are joined with `", "`,
    /// anything else is ignored. A block that is valid YAML but not a
    /// mapping (a bare string or a list) carries no metadata.
    pub fn metadata(&self) -> Result<Metadata, FrontMatterError> {
        if self.raw.trim().is_empty() {
            return Ok(Metadata::new());
        }
        match self.format {
            FrontMatterFormat::Yaml => yaml_metadata(self.raw),
            FrontMatterFormat::Toml => toml_metadata(self.raw),
        }
    }
}

fn yaml_metadata(raw: &str) -> Result<Metadata, FrontMatterError> {
    use serde_yaml::Value;

    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    let value: Value = serde_yaml::from_str(raw)?;
    if !value.is_mapping() {
        return Ok(Metadata::new());
    }

    let mut metadata = Metadata::new();
    for key in KEYS {
        let text = match value.get(key) {
            Some(Value::Sequence(items)) => join(items.iter().filter_map(scalar)),
            Some(other) => scalar(other),
            None => None,
        };
        if let Some(text) = text {
            metadata.set(key, text);
        }
    }
    Ok(metadata)
}

fn toml_metadata(raw: &str) -> Result<Metadata, FrontMatterError> {
    use toml::Value;

    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::Datetime(d) => Some(d.to_string()),
            Value::Array(_) | Value::Table(_) => None,
        }
    }

    let table: toml::Table = toml::from_str(raw)?;
    let mut metadata = Metadata::new();
    for key in KEYS {
        let text = match table.get(key) {
            Some(Value::Array(items)) => join(items.iter().filter_map(scalar)),
            Some(other) => scalar(other),
            None => None,
        };
        if let Some(text) = text {
            metadata.set(key, text);
        }
    }
    Ok(metadata)
}

fn join(items: impl Iterator<Item = String>) -> Option<String> {
    let items: Vec<String> = items.collect();
    (!items.is_empty()).then(|| items.join(", "))
}

/// Line starting at `pos` without its `\n`, and the offset after the `\n`.
#[inline]
fn next_line(input: &str, pos: usize) -> (&str, usize) {
    match memchr(b'\n', &input.as_bytes()[pos..]) {
        Some(len) => (&input[pos..pos + len], pos + len + 1),
        None => (&input[pos..], input.len()),
    }
}

#[inline]
fn trim_delimiter(line: &str) -> &str {
    line.trim_end_matches([' ', '\t', '\r'])
}
