//! Markdown → MarkdownV2 conversion through the public API

use insta::assert_snapshot;
use tgmd_babel::{convert_markdown, ConversionOptions};

fn convert(text: &str) -> String {
    convert_markdown(text, &ConversionOptions::default())
}

#[test]
fn test_bold_text() {
    assert_eq!(convert("**bold text**"), "*bold text*");
}

#[test]
fn test_italic_text() {
    assert_eq!(convert("*italic text*"), "_italic text_");
}

#[test]
fn test_strikethrough() {
    assert_eq!(convert("~~strikethrough~~"), "~strikethrough~");
}

#[test]
fn test_header_becomes_bold() {
    assert_eq!(convert("# Header 1"), "*Header 1*");
}

#[test]
fn test_link_is_copied_verbatim() {
    assert_eq!(
        convert("[Google](https://google.com)"),
        "[Google](https://google.com)"
    );
}

#[test]
fn test_code_block_drops_language() {
    assert_eq!(
        convert("```javascript\nconsole.log(\"hello\");\n```"),
        "```\nconsole.log(\"hello\");\n```"
    );
}

#[test]
fn test_combined_formatting() {
    assert_eq!(
        convert("**bold** and *italic* and ~~strikethrough~~"),
        "*bold* and _italic_ and ~strikethrough~"
    );
}

#[test]
fn test_inline_code_is_untouched() {
    assert_eq!(convert("run `a.b(c)` now."), "run `a.b(c)` now\\.");
}

#[test]
fn test_parentheses_outside_links_are_escaped() {
    let result = convert("Text (note) here (e.g. this)?");
    assert!(result.contains("\\(note\\)"));
    assert!(result.contains("\\(e\\.g\\."));
    let bare_paren = result
        .char_indices()
        .filter(|&(_, c)| c == '(' || c == ')')
        .any(|(i, _)| !result[..i].ends_with('\\'));
    assert!(!bare_paren, "unescaped parenthesis in {result}");
}

#[test]
fn test_question_mark_is_not_reserved() {
    assert_eq!(convert("why?"), "why?");
}

#[test]
fn test_stray_asterisk_is_escaped() {
    let result = convert("Rating: 5* of 5 and **bold**");
    assert_eq!(result, "Rating: 5\\* of 5 and *bold*");
}

#[test]
fn test_bold_italic() {
    assert_eq!(convert("***both***"), "*_both_*");
}

#[test]
fn test_double_underscore_bold() {
    assert_eq!(convert("__strong__ words"), "*strong* words");
}

#[test]
fn test_multiline_document() {
    let source = "## Steps\n1. Install\n2. Run `tgmd`\n\n> quoted #tag";
    assert_snapshot!(convert(source), @r"
    *Steps*
    1\. Install
    2\. Run `tgmd`

    \> quoted \#tag
    ");
}

#[test]
fn test_each_call_is_independent() {
    let first = convert("[a](https://a.example) and `x`");
    let second = convert("[a](https://a.example) and `x`");
    assert_eq!(first, second);
    assert_eq!(first, "[a](https://a.example) and `x`");
}
