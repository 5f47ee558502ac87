//! HTML subset to Markdown
//!
//! A tag-level rewrite, not an HTML parser: each supported element is matched by a
//! case-insensitive pattern with a non-greedy body and replaced by its Markdown form.
//! Elements Markdown cannot express (underline, spoiler) become role sentinels that
//! the conversion pipeline turns into MarkdownV2 delimiters at the very end.

use crate::common::marker::Role;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

enum Replacement {
    Template(&'static str),
    Wrap(Role),
}

struct TagRule {
    pattern: Regex,
    replacement: Replacement,
}

/// Applied in order. `<pre>` runs before `<code>` so a `<pre><code>` pair never
/// degrades into inline code.
static TAG_RULES: Lazy<Vec<TagRule>> = Lazy::new(|| {
    use Replacement::{Template, Wrap};
    [
        (r"(?is)<pre><code[^>]*>(.*?)</code></pre>", Template("```\n$1\n```")),
        (r"(?is)<pre>(.*?)</pre>", Template("```\n$1\n```")),
        (r"(?i)<(?:strong|b)>(.*?)</(?:strong|b)>", Template("**$1**")),
        (r"(?i)<(?:em|i)>(.*?)</(?:em|i)>", Template("*$1*")),
        (r"(?i)<u>(.*?)</u>", Wrap(Role::Underline)),
        (r"(?i)<(?:s|strike|del)>(.*?)</(?:s|strike|del)>", Template("~~$1~~")),
        (r"(?i)<code>(.*?)</code>", Template("`$1`")),
        (
            r#"(?i)<a[^>]+href=['"](.*?)['"][^>]*>(.*?)</a>"#,
            Template("[$2]($1)"),
        ),
        (
            r#"(?i)<span[^>]*class=['"]*spoiler['"]*[^>]*>(.*?)</span>"#,
            Wrap(Role::Spoiler),
        ),
        (r"(?i)<tg-spoiler>(.*?)</tg-spoiler>", Wrap(Role::Spoiler)),
        (r"(?i)<br\s*/?>", Template("\n")),
    ]
    .into_iter()
    .map(|(pattern, replacement)| TagRule {
        pattern: Regex::new(pattern).expect("valid tag pattern"),
        replacement,
    })
    .collect()
});

/// Decoded in order; `&amp;` last so `&amp;lt;` stays `&lt;`.
const ENTITIES: [(&str, &str); 5] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Rewrite the supported HTML tags in `html` into Markdown.
pub fn html_to_markdown(html: &str) -> String {
    let mut markdown = TAG_RULES.iter().fold(html.to_string(), |text, rule| {
        match rule.replacement {
            Replacement::Template(template) => {
                rule.pattern.replace_all(&text, template).into_owned()
            }
            Replacement::Wrap(role) => rule
                .pattern
                .replace_all(&text, |caps: &Captures| role.wrap(&caps[1]))
                .into_owned(),
        }
    });

    for (entity, decoded) in ENTITIES {
        markdown = markdown.replace(entity, decoded);
    }

    tracing::trace!(len = markdown.len(), "html tags rewritten");
    markdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::marker::emit;

    #[test]
    fn test_inline_tags() {
        assert_eq!(html_to_markdown("<strong>a</strong> <b>b</b>"), "**a** **b**");
        assert_eq!(html_to_markdown("<em>a</em> <I>b</I>"), "*a* *b*");
        assert_eq!(html_to_markdown("<del>x</del>"), "~~x~~");
        assert_eq!(html_to_markdown("<code>x</code>"), "`x`");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            html_to_markdown(r#"<a href="https://example.com">Link</a>"#),
            "[Link](https://example.com)"
        );
        assert_eq!(
            html_to_markdown("<a class='x' href='tg://user?id=1'>me</a>"),
            "[me](tg://user?id=1)"
        );
    }

    #[test]
    fn test_pre_wins_over_code() {
        assert_eq!(
            html_to_markdown("<pre><code class=\"language-rust\">let x;</code></pre>"),
            "```\nlet x;\n```"
        );
        assert_eq!(html_to_markdown("<pre>a\nb</pre>"), "```\na\nb\n```");
    }

    #[test]
    fn test_underline_and_spoiler_become_sentinels() {
        assert_eq!(emit(&html_to_markdown("<u>under</u>")), "__under__");
        assert_eq!(
            emit(&html_to_markdown(r#"<span class="spoiler">s</span>"#)),
            "||s||"
        );
        assert_eq!(emit(&html_to_markdown("<tg-spoiler>t</tg-spoiler>")), "||t||");
    }

    #[test]
    fn test_line_breaks_and_entities() {
        assert_eq!(html_to_markdown("a<br>b<br/>c<BR />d"), "a\nb\nc\nd");
        assert_eq!(
            html_to_markdown("&lt;tag&gt; &quot;q&quot; &#39;s&#39; &amp;lt;"),
            "<tag> \"q\" 's' &lt;"
        );
    }

    #[test]
    fn test_unknown_tags_are_left_alone() {
        assert_eq!(html_to_markdown("<p>para</p>"), "<p>para</p>");
    }
}
