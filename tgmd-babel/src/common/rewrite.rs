//! Structural rewrite: Markdown delimiters to deferred MarkdownV2 markers
//!
//! The rules run in a fixed order over text whose protected spans are already
//! shielded. Each rule replaces the delimiters it recognizes with role sentinels
//! (see [`super::marker`]), so no later rule can match an earlier rule's output:
//!
//! 1. `***x***` becomes bold around italic.
//! 2. `*x*` becomes italic, where neither asterisk touches another asterisk and the
//!    content stays on one line. This runs before rule 3 so that `**` never swallows
//!    an italic delimiter.
//! 3. `**x**` becomes bold.
//! 4. `__x__` becomes bold, where neither end touches a third underscore.
//! 5. A line starting with one to six `#` and whitespace becomes a bold line.
//! 6. `~~x~~` becomes strikethrough.
//!
//! Anything a rule does not claim stays literal and is escaped later.

use super::marker::Role;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD_ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\*([^*]+)\*\*\*").expect("valid bold-italic pattern"));

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"));

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^#{1,6}\s+(.+)$").expect("valid header pattern"));

static STRIKETHROUGH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"~~([^~]+)~~").expect("valid strikethrough pattern"));

/// One step of the Markdown to MarkdownV2 rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    BoldItalic,
    Italic,
    Bold,
    DoubleUnderscore,
    Header,
    Strikethrough,
}

impl Rule {
    /// Application order; see the module docs for why it matters.
    pub(crate) const ORDER: [Rule; 6] = [
        Rule::BoldItalic,
        Rule::Italic,
        Rule::Bold,
        Rule::DoubleUnderscore,
        Rule::Header,
        Rule::Strikethrough,
    ];

    pub(crate) fn apply(self, text: &str) -> String {
        match self {
            Rule::BoldItalic => BOLD_ITALIC
                .replace_all(text, |caps: &Captures| {
                    Role::Bold.wrap(&Role::Italic.wrap(&caps[1]))
                })
                .into_owned(),
            Rule::Italic => replace_guarded(text, '*', 1, true, Role::Italic),
            Rule::Bold => wrap_matches(&BOLD, text, Role::Bold),
            Rule::DoubleUnderscore => replace_guarded(text, '_', 2, false, Role::Bold),
            Rule::Header => wrap_matches(&HEADER, text, Role::Bold),
            Rule::Strikethrough => wrap_matches(&STRIKETHROUGH, text, Role::Strikethrough),
        }
    }
}

/// Run every rule in order.
pub(crate) fn rewrite(shielded: &str) -> String {
    Rule::ORDER
        .iter()
        .fold(shielded.to_string(), |text, rule| rule.apply(&text))
}

fn wrap_matches(pattern: &Regex, text: &str, role: Role) -> String {
    pattern
        .replace_all(text, |caps: &Captures| role.wrap(&caps[1]))
        .into_owned()
}

/// Replace `d{width} body d{width}` runs where the opening run is not preceded by
/// `d`, the closing run is not followed by `d`, and the body is non-empty and free of
/// `d` (and of newlines when `single_line`). Matches are found left to right and never
/// overlap.
fn replace_guarded(text: &str, delim: char, width: usize, single_line: bool, role: Role) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(end) = guarded_match(&chars, i, delim, width, single_line) {
            let body: String = chars[i + width..end - width].iter().collect();
            out.push_str(&role.wrap(&body));
            i = end;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn guarded_match(
    chars: &[char],
    start: usize,
    delim: char,
    width: usize,
    single_line: bool,
) -> Option<usize> {
    let is_run = |at: usize| {
        at + width <= chars.len() && chars[at..at + width].iter().all(|&c| c == delim)
    };

    if start > 0 && chars[start - 1] == delim {
        return None;
    }
    if !is_run(start) {
        return None;
    }

    let body_start = start + width;
    let mut j = body_start;
    while j < chars.len() && chars[j] != delim {
        if single_line && chars[j] == '\n' {
            return None;
        }
        j += 1;
    }

    if j == body_start || !is_run(j) {
        return None;
    }

    let end = j + width;
    if chars.get(end) == Some(&delim) {
        return None;
    }
    Some(end)
}
