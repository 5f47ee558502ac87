//! MarkdownV2 validation
//!
//! A read-only set of independent scans. Findings are data, never errors: the
//! result lists what would likely make Telegram reject or misrender the message.
//!
//! - Paired delimiters: an odd number of unescaped occurrences of a delimiter is an
//!   error, one per delimiter kind.
//! - Unescaped reserved characters: one warning listing each offending character
//!   once, in order of first appearance.
//! - Nesting: a coarse pattern check for one delimiter kind opening inside another.
//!   It over-reports adjacent markers and misses some real nesting.
//! - Link targets: anything that is not `http://`, `https://` or `tg://`.
//!
//! Strict mode adds empty delimiter pairs (errors) and bracketed text with no link
//! target (warnings).

use super::escape::{is_reserved, ESCAPE};
use super::placeholder::LINK;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static NESTED_ITALIC_IN_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*[^*]*_[^_]*_[^*]*\*").expect("valid nesting pattern"));

static NESTED_BOLD_IN_ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_[^_]*\*[^*]*\*[^_]*_").expect("valid nesting pattern"));

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]").expect("valid bracket pattern"));

const LINK_SCHEMES: [&str; 3] = ["http://", "https://", "tg://"];

pub const CONFIRMATION: &str = "Text is properly formatted for Telegram MarkdownV2!";

/// A delimiter whose occurrences must pair up
struct PairedDelimiter {
    name: &'static str,
    symbol: &'static str,
    glyph: &'static str,
}

const PAIRED: [PairedDelimiter; 6] = [
    PairedDelimiter {
        name: "bold",
        symbol: "*",
        glyph: "asterisk",
    },
    PairedDelimiter {
        name: "italic",
        symbol: "_",
        glyph: "underscore",
    },
    PairedDelimiter {
        name: "underline",
        symbol: "__",
        glyph: "double underscore",
    },
    PairedDelimiter {
        name: "strikethrough",
        symbol: "~",
        glyph: "tilde",
    },
    PairedDelimiter {
        name: "code",
        symbol: "`",
        glyph: "backtick",
    },
    PairedDelimiter {
        name: "spoiler",
        symbol: "||",
        glyph: "double pipe",
    },
];

/// Delimiter runs that are empty pairs when they appear at exactly this length.
/// Underline is `__`, so only an opener directly followed by its closer is empty.
const EMPTY_PAIRS: [(&str, char, usize); 5] = [
    ("bold", '*', 2),
    ("underline", '_', 4),
    ("strikethrough", '~', 2),
    ("code", '`', 2),
    ("spoiler", '|', 4),
];

/// Outcome of a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True exactly when `errors` is empty
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Knobs for [`validate_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Also report empty delimiter pairs and bracketed text without a target
    pub strict: bool,
}

/// Validate with the default checks.
pub fn validate(text: &str) -> ValidationResult {
    validate_with(text, &ValidationOptions::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(len = text.len(), strict = options.strict))]
pub fn validate_with(text: &str, options: &ValidationOptions) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    for delimiter in &PAIRED {
        if count_unescaped(text, delimiter.symbol) % 2 != 0 {
            errors.push(format!(
                "Unmatched {} formatting - missing closing {} ({})",
                delimiter.name, delimiter.symbol, delimiter.glyph
            ));
        }
    }

    let unescaped = unescaped_reserved(text);
    if !unescaped.is_empty() {
        let listed: Vec<String> = unescaped.iter().map(char::to_string).collect();
        warnings.push(format!(
            "Found unescaped special characters: {}",
            listed.join(", ")
        ));
        suggestions.push(
            "Use the \"escape\" operation to automatically escape special characters".to_string(),
        );
    }

    if NESTED_ITALIC_IN_BOLD.is_match(text) || NESTED_BOLD_IN_ITALIC.is_match(text) {
        warnings.push(
            "Nested formatting detected - this may not render correctly in Telegram".to_string(),
        );
        suggestions
            .push("Avoid nesting different formatting types for better compatibility".to_string());
    }

    for caps in LINK.captures_iter(text) {
        let target = &caps[2];
        if !target.is_empty() && !LINK_SCHEMES.iter().any(|s| target.starts_with(s)) {
            warnings.push(format!("Potentially invalid URL format: {target}"));
            suggestions.push(
                "Ensure URLs start with http://, https://, or tg:// for proper link functionality"
                    .to_string(),
            );
        }
    }

    if options.strict {
        check_empty_pairs(text, &mut errors);
        check_bare_brackets(text, &mut warnings);
    }

    if errors.is_empty() && warnings.is_empty() {
        suggestions.push(CONFIRMATION.to_string());
    }

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "validation finished"
    );

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
    }
}

fn is_escaped_at(text: &str, byte: usize) -> bool {
    text[..byte].ends_with(ESCAPE)
}

/// Non-overlapping occurrences of `symbol` whose first character is not escaped.
fn count_unescaped(text: &str, symbol: &str) -> usize {
    let mut count = 0;
    let mut from = 0;
    while let Some(found) = text[from..].find(symbol) {
        let at = from + found;
        if is_escaped_at(text, at) {
            from = at + symbol.chars().next().map_or(1, char::len_utf8);
        } else {
            count += 1;
            from = at + symbol.len();
        }
    }
    count
}

fn unescaped_reserved(text: &str) -> Vec<char> {
    let mut seen = Vec::new();
    let mut previous = None;
    for c in text.chars() {
        if is_reserved(c) && previous != Some(ESCAPE) && !seen.contains(&c) {
            seen.push(c);
        }
        previous = Some(c);
    }
    seen
}

fn check_empty_pairs(text: &str, errors: &mut Vec<String>) {
    for (name, delim, len) in EMPTY_PAIRS {
        if has_exact_run(text, delim, len) {
            let pair: String = std::iter::repeat(delim).take(len).collect();
            errors.push(format!("Empty {name} formatting: {pair}"));
        }
    }
}

/// Whether `text` has an unescaped run of exactly `len` copies of `delim`.
fn has_exact_run(text: &str, delim: char, len: usize) -> bool {
    let mut run = 0;
    let mut run_escaped = false;
    let mut previous = None;
    for c in text.chars().chain(std::iter::once('\0')) {
        if c == delim {
            if run == 0 {
                run_escaped = previous == Some(ESCAPE);
            }
            run += 1;
        } else {
            if run == len && !run_escaped {
                return true;
            }
            run = 0;
        }
        previous = Some(c);
    }
    false
}

fn check_bare_brackets(text: &str, warnings: &mut Vec<String>) {
    for found in BRACKETED.find_iter(text) {
        if is_escaped_at(text, found.start()) {
            continue;
        }
        if !text[found.end()..].starts_with('(') {
            warnings.push(format!("Link text without URL: {}", found.as_str()));
        }
    }
}
