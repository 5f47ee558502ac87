//! Backslash escaping for MarkdownV2
//!
//! Two escapers live here:
//!
//! - [`escape_all`] is total: every reserved character and every backslash gets a
//!   backslash in front of it, with no notion of structure. Running it twice escapes
//!   the backslashes added by the first run again.
//! - [`escape_literals`] is the conversion-aware pass. It runs after the structural
//!   rewrite, copies sentinels and span tokens through untouched, and escapes the
//!   rest, with two lookaround exceptions: brackets and parentheses that still form a
//!   `[label](target)` construct, and hyphens next to a strikethrough marker.

use super::marker::Role;
use super::placeholder::{LINK, TOKEN_CLOSE, TOKEN_OPEN};
use std::collections::HashSet;

/// The escape character
pub const ESCAPE: char = '\\';

/// Characters MarkdownV2 treats as potentially structural, in escaping order
pub const RESERVED: [char; 18] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Escape every reserved character and backslash, unconditionally.
///
/// Backslashes are escaped first; a character is never escaped twice within one
/// call, so `\*` becomes `\\\*`.
pub fn escape_all(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 2);
    for c in text.chars() {
        if c == ESCAPE || is_reserved(c) {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Escape the literal text of a rewritten document.
pub(crate) fn escape_literals(text: &str) -> String {
    let link_syntax = link_construct_offsets(text);
    let strike = Role::Strikethrough.sentinel();
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    let mut in_token = false;

    for (n, &(offset, c)) in chars.iter().enumerate() {
        if in_token {
            escaped.push(c);
            in_token = c != TOKEN_CLOSE;
            continue;
        }
        if c == TOKEN_OPEN {
            in_token = true;
            escaped.push(c);
            continue;
        }

        let needs_escape = match c {
            ESCAPE => true,
            '[' | ']' | '(' | ')' => !link_syntax.contains(&offset),
            '-' => {
                let before = n.checked_sub(1).map(|p| chars[p].1);
                let after = chars.get(n + 1).map(|&(_, next)| next);
                before != Some(strike) && after != Some(strike)
            }
            other => is_reserved(other),
        };

        if needs_escape {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }

    escaped
}

/// Byte offsets of the `[`, `]`, `(` and `)` that delimit a `[label](target)`.
///
/// Inside `parse_from_markdown` every link is already a token by the time this runs,
/// so the set is empty there. It only matters when `escape_literals` is handed text
/// that did not go through `extract`.
fn link_construct_offsets(text: &str) -> HashSet<usize> {
    let mut offsets = HashSet::new();
    for caps in LINK.captures_iter(text) {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        offsets.insert(whole.start());
        offsets.insert(label.end());
        offsets.insert(label.end() + 1);
        offsets.insert(whole.end() - 1);
    }
    offsets
}
