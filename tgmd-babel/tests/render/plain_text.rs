//! MarkdownV2 → plain text

use tgmd_babel::{escape_literal_text, to_plain_text, FormatRegistry};

#[test]
fn test_strips_all_formatting() {
    assert_eq!(
        to_plain_text("*bold* _italic_ `code` [link](https://example.com) ||spoiler||"),
        "bold italic code link spoiler"
    );
}

#[test]
fn test_resolves_escapes() {
    assert_eq!(
        to_plain_text("Price: \\$10\\.99 \\(sale\\)"),
        "Price: $10.99 (sale)"
    );
}

#[test]
fn test_escaped_code_and_link_syntax_stays_literal() {
    let escaped = escape_literal_text("`a` and [a](b)");
    assert_eq!(escaped, "\\`a\\` and \\[a\\]\\(b\\)");
    assert_eq!(to_plain_text(&escaped), "`a` and [a](b)");
}

#[test]
fn test_code_block_body_is_kept() {
    assert_eq!(to_plain_text("```py\nx = 1\n```"), "x = 1");
}

#[test]
fn test_markdown_to_text_through_registry() {
    let registry = FormatRegistry::default();
    let text = registry
        .convert(
            "# Title\n**v2.0** (beta)",
            "markdown",
            "text",
            &Default::default(),
            &Default::default(),
        )
        .unwrap();
    assert_eq!(text, "Title\nv2.0 (beta)");
}
