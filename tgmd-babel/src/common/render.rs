//! MarkdownV2 to HTML or plain text
//!
//! Rendering reuses the protected-span discipline of the forward direction.
//! Backslash escapes are shielded first, so an escaped backtick or bracket can never
//! open a code span or a link. Code blocks, inline code and links are then rendered
//! in isolation and shielded behind tokens; the structural rules run over what is left, turning
//! delimiter pairs into role sentinels. A final walk emits the renderer's open and
//! close text for each sentinel and renders the remaining literal text. The shielded
//! spans go back in last, already rendered.
//!
//! The [`Renderer`] trait is the seam between the shared walk and the output dialect.

use super::marker::Role;
use super::placeholder::{
    SpanKind, SpanStore, CODE_BLOCK, INLINE_CODE, LINK, TOKEN_CLOSE, TOKEN_OPEN,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ESCAPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([!-~])").expect("valid escape pattern"));

/// Delimiter rules in application order. Longer forms of a glyph run first so the
/// single form never splits a double one.
static RULES: Lazy<Vec<(Regex, Role)>> = Lazy::new(|| {
    [
        (r"\*\*([^*]+)\*\*", Role::Bold),
        (r"\*([^*]+)\*", Role::Bold),
        (r"__([^_]+)__", Role::Underline),
        (r"_([^_]+)_", Role::Italic),
        (r"~~([^~]+)~~", Role::Strikethrough),
        (r"~([^~]+)~", Role::Strikethrough),
        (r"\|\|([^|]+)\|\|", Role::Spoiler),
    ]
    .into_iter()
    .map(|(pattern, role)| (Regex::new(pattern).expect("valid render rule"), role))
    .collect()
});

/// Output dialect for [`render`]
pub trait Renderer {
    fn open(&self, role: Role) -> &'static str;

    fn close(&self, role: Role) -> &'static str;

    /// Render literal text (already unescaped).
    fn text(&self, literal: &str) -> String;

    fn inline_code(&self, code: &str) -> String;

    fn code_block(&self, language: Option<&str>, code: &str) -> String;

    fn link(&self, label: &str, target: &str) -> String;
}

/// HTML subset accepted by Telegram's HTML parse mode
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn open(&self, role: Role) -> &'static str {
        match role {
            Role::Bold => "<strong>",
            Role::Italic => "<em>",
            Role::Underline => "<u>",
            Role::Strikethrough => "<s>",
            Role::Spoiler => "<span class=\"spoiler\">",
        }
    }

    fn close(&self, role: Role) -> &'static str {
        match role {
            Role::Bold => "</strong>",
            Role::Italic => "</em>",
            Role::Underline => "</u>",
            Role::Strikethrough => "</s>",
            Role::Spoiler => "</span>",
        }
    }

    fn text(&self, literal: &str) -> String {
        escape_html(literal)
    }

    fn inline_code(&self, code: &str) -> String {
        format!("<code>{}</code>", escape_html(code))
    }

    fn code_block(&self, language: Option<&str>, code: &str) -> String {
        match language {
            Some(lang) => format!(
                "<pre><code class=\"language-{lang}\">{}</code></pre>",
                escape_html(code)
            ),
            None => format!("<pre><code>{}</code></pre>", escape_html(code)),
        }
    }

    fn link(&self, label: &str, target: &str) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            escape_html(target),
            escape_html(label)
        )
    }
}

/// Formatting stripped, content kept
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn open(&self, _role: Role) -> &'static str {
        ""
    }

    fn close(&self, _role: Role) -> &'static str {
        ""
    }

    fn text(&self, literal: &str) -> String {
        literal.to_string()
    }

    fn inline_code(&self, code: &str) -> String {
        code.to_string()
    }

    fn code_block(&self, _language: Option<&str>, code: &str) -> String {
        code.to_string()
    }

    fn link(&self, label: &str, _target: &str) -> String {
        label.to_string()
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Render MarkdownV2 `source` through `renderer`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn render<R: Renderer>(source: &str, renderer: &R) -> String {
    let mut spans = SpanStore::new();

    // Escapes go first; tokens inside code and link spans are restored after them.
    let shielded = spans.shield(source, SpanKind::Escape, &ESCAPED, |caps: &Captures| {
        renderer.text(&caps[1])
    });
    let shielded = spans.shield(&shielded, SpanKind::CodeBlock, &CODE_BLOCK, |caps| {
        let language = caps.get(1).map(|m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());
        renderer.code_block(language, body.trim())
    });
    let shielded = spans.shield(&shielded, SpanKind::InlineCode, &INLINE_CODE, |caps| {
        renderer.inline_code(&caps[1])
    });
    let shielded = spans.shield(&shielded, SpanKind::Link, &LINK, |caps| {
        renderer.link(&caps[1], &caps[2])
    });
    tracing::debug!(spans = spans.len(), "shielded spans for rendering");

    let marked = RULES.iter().fold(shielded, |text, (pattern, role)| {
        pattern
            .replace_all(&text, |caps: &Captures| role.wrap(&caps[1]))
            .into_owned()
    });

    spans.restore(&emit_roles(&marked, renderer))
}

/// Walk marked text, turning sentinel pairs into open and close text and rendering
/// literal runs. Tokens are copied through.
fn emit_roles<R: Renderer>(marked: &str, renderer: &R) -> String {
    let mut out = String::with_capacity(marked.len());
    let mut open: Vec<Role> = Vec::new();
    let mut literal = String::new();
    let mut in_token = false;

    for c in marked.chars() {
        if in_token {
            out.push(c);
            in_token = c != TOKEN_CLOSE;
            continue;
        }
        let role = Role::from_sentinel(c);
        if c != TOKEN_OPEN && role.is_none() {
            literal.push(c);
            continue;
        }

        out.push_str(&renderer.text(&literal));
        literal.clear();

        match role {
            Some(role) => match open.iter().position(|&r| r == role) {
                Some(at) => {
                    open.remove(at);
                    out.push_str(renderer.close(role));
                }
                None => {
                    open.push(role);
                    out.push_str(renderer.open(role));
                }
            },
            None => {
                in_token = true;
                out.push(c);
            }
        }
    }

    out.push_str(&renderer.text(&literal));
    out
}
