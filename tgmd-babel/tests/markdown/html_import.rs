//! HTML tags inside Markdown input

use tgmd_babel::{convert_markdown, ConversionOptions};

fn convert(text: &str) -> String {
    convert_markdown(text, &ConversionOptions::default())
}

#[test]
fn test_strong_tag() {
    assert_eq!(convert("<strong>bold</strong>"), "*bold*");
}

#[test]
fn test_em_tag() {
    assert_eq!(convert("<em>italic</em>"), "_italic_");
}

#[test]
fn test_underline_tag() {
    assert_eq!(convert("<u>underline</u>"), "__underline__");
}

#[test]
fn test_code_tag() {
    assert_eq!(convert("<code>code</code>"), "`code`");
}

#[test]
fn test_anchor_tag() {
    assert_eq!(
        convert("<a href=\"https://example.com\">Link</a>"),
        "[Link](https://example.com)"
    );
}

#[test]
fn test_strike_tag() {
    assert_eq!(convert("<s>old</s> new"), "~old~ new");
}

#[test]
fn test_pre_block() {
    assert_eq!(
        convert("<pre><code class=\"language-py\">print(1)</code></pre>"),
        "```\nprint(1)\n```"
    );
}

#[test]
fn test_tags_left_as_text_when_disabled() {
    let options = ConversionOptions {
        convert_html_tags: false,
        ..ConversionOptions::default()
    };
    assert_eq!(
        convert_markdown("<b>x</b>", &options),
        "<b\\>x</b\\>"
    );
}
