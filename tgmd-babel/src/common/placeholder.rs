//! Protected spans: extraction and restoration
//!
//! Links, fenced code blocks and inline code must come out of a conversion exactly as
//! they went in. Before any rewriting, each of them is cut out of the text and replaced
//! by an opaque token of the form `U+E000 <TAG> <index> U+E001`, where `<index>` is
//! the zero-based position in that kind's capture list. Restoration walks the kinds
//! in reverse extraction order, so a span that was captured inside a later span (a
//! link token inside a code block, say) is put back after its container.
//!
//! All state lives in a [`SpanStore`] owned by the caller; nothing is shared between
//! calls.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub(crate) const TOKEN_OPEN: char = '\u{E000}';
pub(crate) const TOKEN_CLOSE: char = '\u{E001}';

pub(crate) static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("valid link pattern"));

pub(crate) static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```([A-Za-z0-9_]+)?\n?(.*?)```").expect("valid code block pattern")
});

pub(crate) static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x{E000}([A-Z]+)([0-9]+)\x{E001}").expect("valid token pattern")
});

/// Kind of a protected span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Link,
    CodeBlock,
    InlineCode,
    /// A backslash escape, shielded while rendering MarkdownV2
    Escape,
}

impl SpanKind {
    fn tag(self) -> &'static str {
        match self {
            SpanKind::Link => "LINK",
            SpanKind::CodeBlock => "CODE",
            SpanKind::InlineCode => "INLINE",
            SpanKind::Escape => "ESC",
        }
    }
}

/// A substring cut out of the text, with the token that stands in for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    pub kind: SpanKind,
    /// Text to put back (for code blocks, the normalized fence)
    pub original: String,
    pub token: String,
}

/// Per-call record of extracted spans
#[derive(Debug, Clone, Default)]
pub struct SpanStore {
    spans: Vec<ProtectedSpan>,
    /// Kinds in the order they were first shielded
    order: Vec<SpanKind>,
}

impl SpanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn spans(&self) -> &[ProtectedSpan] {
        &self.spans
    }

    /// Spans of one kind, in capture order (the token index is the position here).
    pub fn spans_of(&self, kind: SpanKind) -> impl Iterator<Item = &ProtectedSpan> {
        self.spans.iter().filter(move |span| span.kind == kind)
    }

    /// Replace every match of `pattern` with a fresh token of `kind`, storing what
    /// `keep` returns for that match as the text to restore.
    pub fn shield<F>(&mut self, text: &str, kind: SpanKind, pattern: &Regex, mut keep: F) -> String
    where
        F: FnMut(&Captures) -> String,
    {
        if !self.order.contains(&kind) {
            self.order.push(kind);
        }
        let mut next_index = self.spans_of(kind).count();

        pattern
            .replace_all(text, |caps: &Captures| {
                let token = format!("{TOKEN_OPEN}{}{next_index}{TOKEN_CLOSE}", kind.tag());
                next_index += 1;
                self.spans.push(ProtectedSpan {
                    kind,
                    original: keep(caps),
                    token: token.clone(),
                });
                token
            })
            .into_owned()
    }

    /// Put every shielded span back, innermost kinds last.
    pub fn restore(&self, text: &str) -> String {
        let mut restored = text.to_string();
        for &kind in self.order.iter().rev() {
            let originals: Vec<&str> = self
                .spans_of(kind)
                .map(|span| span.original.as_str())
                .collect();
            restored = TOKEN
                .replace_all(&restored, |caps: &Captures| {
                    let index = caps[2].parse::<usize>().ok();
                    match index.and_then(|i| originals.get(i)) {
                        Some(original) if &caps[1] == kind.tag() => (*original).to_string(),
                        _ => caps[0].to_string(),
                    }
                })
                .into_owned();
        }
        restored
    }
}

/// Shield links, fenced code blocks and inline code, in that priority order.
///
/// Code block bodies are trimmed and re-wrapped in a bare triple-backtick fence; the
/// language tag is dropped. Links and inline code are kept verbatim.
pub fn extract(text: &str) -> (String, SpanStore) {
    let mut store = SpanStore::new();
    let shielded = store.shield(text, SpanKind::Link, &LINK, |caps| caps[0].to_string());
    let shielded = store.shield(&shielded, SpanKind::CodeBlock, &CODE_BLOCK, |caps| {
        let body = caps.get(2).map_or("", |m| m.as_str());
        format!("```\n{}\n```", body.trim())
    });
    let shielded = store.shield(&shielded, SpanKind::InlineCode, &INLINE_CODE, |caps| {
        caps[0].to_string()
    });
    (shielded, store)
}

/// Inverse of [`extract`].
pub fn restore(text: &str, spans: &SpanStore) -> String {
    spans.restore(text)
}
