//! MarkdownV2 → HTML

use insta::assert_snapshot;
use tgmd_babel::options::{EntityMapping, EntityMappingSpec};
use tgmd_babel::{to_html, RenderOptions};

fn html(text: &str) -> String {
    to_html(text, &RenderOptions::default())
}

#[test]
fn test_escaped_delimiters_do_not_open_code_or_links() {
    assert_eq!(html("\\`a\\`"), "`a`");
    assert_eq!(html("\\[a\\](b)"), "[a](b)");
    assert_eq!(html("`a\\`b` \\_x\\_"), "<code>a`b</code> _x_");
}

#[test]
fn test_bold() {
    assert_eq!(html("*bold text*"), "<strong>bold text</strong>");
}

#[test]
fn test_italic() {
    assert_eq!(html("_italic text_"), "<em>italic text</em>");
}

#[test]
fn test_strikethrough() {
    assert_eq!(html("~strikethrough text~"), "<s>strikethrough text</s>");
}

#[test]
fn test_inline_code() {
    assert_eq!(html("`inline code`"), "<code>inline code</code>");
}

#[test]
fn test_link() {
    assert_eq!(
        html("[TechFlecks](https://techflecks.com)"),
        "<a href=\"https://techflecks.com\">TechFlecks</a>"
    );
}

#[test]
fn test_spoiler() {
    assert_eq!(
        html("||spoiler text||"),
        "<span class=\"spoiler\">spoiler text</span>"
    );
}

#[test]
fn test_mixed() {
    assert_eq!(
        html("*bold* and _italic_ with `code`"),
        "<strong>bold</strong> and <em>italic</em> with <code>code</code>"
    );
}

#[test]
fn test_underline_is_not_italic() {
    assert_eq!(html("__under__ _it_"), "<u>under</u> <em>it</em>");
}

#[test]
fn test_escapes_are_resolved() {
    assert_eq!(html("1 \\+ 1 \\= 2\\!"), "1 + 1 = 2!");
}

#[test]
fn test_code_block_document() {
    let source = "*Build*\n```sh\nmake <all>\n```\nDone\\.";
    assert_snapshot!(html(source), @r#"
    <strong>Build</strong>
    <pre><code class="language-sh">make &lt;all&gt;</code></pre>
    Done.
    "#);
}

#[test]
fn test_entity_mapping_from_specs() {
    let options = RenderOptions::from_specs(&[EntityMappingSpec {
        from: "<strong>(.*?)</strong>".to_string(),
        to: "<b>$1</b>".to_string(),
    }])
    .unwrap();
    assert_eq!(to_html("*x* and *y*", &options), "<b>x</b> and <b>y</b>");
}

#[test]
fn test_entity_mappings_see_escaped_html() {
    let options = RenderOptions {
        entity_mappings: vec![EntityMapping::new("&amp;", "&").unwrap()],
    };
    assert_eq!(to_html("Q&A", &options), "Q&A");
}
