//! Fixed HTML scaffolding around a converted body.
//!
//! Attribute and title values are inserted verbatim. Metadata coming from
//! untrusted front matter can therefore inject markup through `"` or `<`.

use smallvec::SmallVec;

use crate::metadata::Metadata;

/// Lines of a rendered `<head>` section. Never more than eleven.
pub type HeadLines = SmallVec<[String; 11]>;

/// Render everything from the doctype up to and including `<body>`.
///
/// `title` is the fallback used when `metadata` has no title, typically the
/// input file's base name. An empty `stylesheet` omits the `<link>` line.
pub fn render_head(title: &str, metadata: &Metadata, stylesheet: &str) -> HeadLines {
    let mut lines = HeadLines::new();
    lines.push("<!doctype html>".to_owned());
    lines.push(format!("<html lang=\"{}\">", metadata.lang()));
    lines.push("<head>".to_owned());
    lines.push("\t<meta charset=\"utf-8\">".to_owned());
    lines.push(format!("\t<title>{}</title>", metadata.title_or(title)));
    if let Some(keywords) = &metadata.keywords {
        lines.push(format!("\t<meta name=\"keywords\" content=\"{keywords}\" />"));
    }
    if let Some(description) = &metadata.description {
        lines.push(format!(
            "\t<meta name=\"description\" content=\"{description}\" />"
        ));
    }
    lines.push(
        "\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />".to_owned(),
    );
    if !stylesheet.is_empty() {
        lines.push(format!("\t<link rel=\"stylesheet\" href=\"{stylesheet}\">"));
    }
    lines.push("</head>".to_owned());
    lines.push("<body>".to_owned());
    lines
}

/// Render the closing `</body>` and `</html>` lines.
pub fn render_tail() -> [&'static str; 2] {
    ["</body>", "</html>"]
}
