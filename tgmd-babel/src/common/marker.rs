//! Structural markers and their deferred sentinels
//!
//! The rewrite stage never writes MarkdownV2 delimiters directly. Each recognized
//! delimiter becomes a single sentinel character from the Unicode private use area,
//! which carries no meaning in any dialect and is not in the reserved set. The
//! literal escaper therefore sees only two kinds of characters: plain text (which it
//! escapes) and sentinels (which it copies through). [`emit`] turns sentinels into the
//! target delimiters once escaping is done.

/// Semantic role of a paired delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Bold,
        Role::Italic,
        Role::Underline,
        Role::Strikethrough,
        Role::Spoiler,
    ];

    /// The canonical MarkdownV2 delimiter for this role (same glyphs open and close)
    pub fn delimiter(self) -> &'static str {
        match self {
            Role::Bold => "*",
            Role::Italic => "_",
            Role::Underline => "__",
            Role::Strikethrough => "~",
            Role::Spoiler => "||",
        }
    }

    pub(crate) fn sentinel(self) -> char {
        match self {
            Role::Bold => '\u{E010}',
            Role::Italic => '\u{E011}',
            Role::Underline => '\u{E012}',
            Role::Strikethrough => '\u{E013}',
            Role::Spoiler => '\u{E014}',
        }
    }

    pub(crate) fn from_sentinel(c: char) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.sentinel() == c)
    }

    /// Wrap `content` in this role's sentinel pair.
    pub(crate) fn wrap(self, content: &str) -> String {
        let sentinel = self.sentinel();
        let mut out = String::with_capacity(content.len() + 2 * sentinel.len_utf8());
        out.push(sentinel);
        out.push_str(content);
        out.push(sentinel);
        out
    }
}

/// Replace every sentinel with its MarkdownV2 delimiter.
pub(crate) fn emit(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match Role::from_sentinel(c) {
            Some(role) => out.push_str(role.delimiter()),
            None => out.push(c),
        }
    }
    out
}
