//! Document metadata.
//!
//! Only four keys are meaningful: `lang`, `title`, `keywords` and
//! `description`. Each is optional; absent keys fall back to defaults when
//! the document shell is rendered.

/// Language used when a document does not declare one.
pub const DEFAULT_LANG: &str = "en";

/// Metadata keys recognised in front matter, in rendering order.
pub const KEYS: [&str; 4] = ["lang", "title", "keywords", "description"];

/// Metadata for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Value of the `lang` attribute on `<html>`.
    pub lang: Option<String>,
    /// Page title. Falls back to the input file's base name.
    pub title: Option<String>,
    /// Content of `<meta name="keywords">`.
    pub keywords: Option<String>,
    /// Content of `<meta name="description">`.
    pub description: Option<String>,
}

impl Metadata {
    /// Metadata with no keys set, as used for plain-text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a known key. Returns `false` (and ignores the value) for any other key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "lang" => &mut self.lang,
            "title" => &mut self.title,
            "keywords" => &mut self.keywords,
            "description" => &mut self.description,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Look up a known key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "lang" => self.lang.as_deref(),
            "title" => self.title.as_deref(),
            "keywords" => self.keywords.as_deref(),
            "description" => self.description.as_deref(),
            _ => None,
        }
    }

    /// Declared language, or [`DEFAULT_LANG`].
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    /// Declared title, or `fallback`.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    /// Whether no key is set.
    pub fn is_empty(&self) -> bool {
        KEYS.iter().all(|key| self.get(key).is_none())
    }
}
