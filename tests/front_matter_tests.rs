use go_go_web::front_matter::{extract, split, FrontMatterFormat};

fn raw(input: &str) -> Option<&str> {
    split(input).0.map(|front| front.raw)
}

#[test]
fn yaml_basic() {
    let (front, body) = split("---\ntitle: Hello\n---\n# Content");
    let front = front.unwrap();
    assert_eq!(front.format, FrontMatterFormat::Yaml);
    assert_eq!(front.raw, "title: Hello\n");
    assert_eq!(body, "# Content");
}

#[test]
fn toml_basic() {
    let (front, body) = split("+++\ntitle = \"Hello\"\n+++\nContent");
    let front = front.unwrap();
    assert_eq!(front.format, FrontMatterFormat::Toml);
    assert_eq!(front.raw, "title = \"Hello\"\n");
    assert_eq!(body, "Content");
}

#[test]
fn no_front_matter() {
    assert_eq!(split("Hello\n---\n"), (None, "Hello\n---\n"));
}

#[test]
fn empty_front_matter() {
    let (meta, body) = extract("---\n---\nContent").unwrap();
    assert!(meta.is_empty());
    assert_eq!(body, "Content");
}

#[test]
fn no_closing_delimiter() {
    // Without closing delimiter, entire doc is markdown
    assert_eq!(raw("---\ntitle: Hello\nno closing"), None);
}

#[test]
fn four_dashes_not_front_matter() {
    assert_eq!(raw("----\ntitle: Hello\n----\n# Content"), None);
}

#[test]
fn mixed_delimiters_dont_match() {
    assert_eq!(raw("---\ntitle: Hello\n+++\n# Content"), None);
}

#[test]
fn trailing_whitespace_on_delimiters() {
    assert_eq!(raw("---  \ntitle: Hello\n---\t\n# Content"), Some("title: Hello\n"));
}

#[test]
fn blank_lines_inside_front_matter() {
    assert_eq!(
        raw("---\ntitle: Hello\n\ndescription: World\n---\n# Content"),
        Some("title: Hello\n\ndescription: World\n")
    );
}

#[test]
fn crlf_line_endings() {
    let (front, body) = split("---\r\ntitle: Hello\r\n---\r\n# Content");
    assert_eq!(front.map(|f| f.raw), Some("title: Hello\r\n"));
    assert_eq!(body, "# Content");
    let (meta, _) = extract("---\r\ntitle: Hello\r\n---\r\n").unwrap();
    assert_eq!(meta.title.as_deref(), Some("Hello"));
}

#[test]
fn front_matter_at_eof_no_trailing_content() {
    let (front, body) = split("---\ntitle: x\n---");
    assert_eq!(front.map(|f| f.raw), Some("title: x\n"));
    assert_eq!(body, "");
}

#[test]
fn not_at_document_start() {
    assert_eq!(raw("\n---\ntitle: Hello\n---\n# Content"), None);
}

#[test]
fn space_before_delimiter_not_front_matter() {
    assert_eq!(raw(" ---\ntitle: Hello\n---\n"), None);
}

#[test]
fn plus_four_not_front_matter() {
    assert_eq!(raw("++++\ntitle: Hello\n++++\n# Content"), None);
}

#[test]
fn all_known_keys() {
    let input = "---\nlang: de\ntitle: Hallo\nkeywords: a, b\ndescription: Eine Seite\nauthor: x\n---\nBody\n";
    let (meta, body) = extract(input).unwrap();
    assert_eq!(meta.lang.as_deref(), Some("de"));
    assert_eq!(meta.title.as_deref(), Some("Hallo"));
    assert_eq!(meta.keywords.as_deref(), Some("a, b"));
    assert_eq!(meta.description.as_deref(), Some("Eine Seite"));
    assert_eq!(body, "Body\n");
}

#[test]
fn nested_values_are_ignored() {
    let (meta, _) = extract("---\ntitle:\n  nested: true\nlang: en\n---\n").unwrap();
    assert_eq!(meta.title, None);
    assert_eq!(meta.lang.as_deref(), Some("en"));
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(extract("+++\ntitle = \n+++\n").is_err());
}

#[test]
fn yaml_string_block_is_removed_without_metadata() {
    let (meta, body) = extract("---\nIntro paragraph\n---\nBody text\n").unwrap();
    assert!(meta.is_empty());
    assert_eq!(body, "Body text\n");
}

#[test]
fn yaml_list_block_is_removed_without_metadata() {
    let (meta, body) = extract("---\n- one\n- two\n---\nBody").unwrap();
    assert!(meta.is_empty());
    assert_eq!(body, "Body");
}
