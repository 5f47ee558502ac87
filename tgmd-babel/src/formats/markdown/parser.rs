//! Markdown to MarkdownV2 conversion pipeline

use crate::common::escape::escape_literals;
use crate::common::marker::emit;
use crate::common::placeholder::{extract, restore};
use crate::common::rewrite::rewrite;
use crate::formats::html::parser::html_to_markdown;
use crate::options::ConversionOptions;

/// Convert Markdown (optionally containing the supported HTML tags) to MarkdownV2.
///
/// Links, fenced code blocks and inline code come out unchanged, except that code
/// fences lose their language tag and their body is trimmed. Every reserved
/// character outside a recognized construct is escaped when `auto_escape` is on.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse_from_markdown(text: &str, options: &ConversionOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let source = if options.convert_html_tags {
        html_to_markdown(text)
    } else {
        text.to_string()
    };

    let (shielded, spans) = extract(&source);
    tracing::debug!(spans = spans.len(), "protected spans extracted");

    let rewritten = rewrite(&shielded);

    let escaped = if options.auto_escape {
        escape_literals(&rewritten)
    } else {
        rewritten
    };
    tracing::debug!(auto_escape = options.auto_escape, "literal text escaped");

    let converted = emit(&restore(&escaped, &spans));
    tracing::debug!(len = converted.len(), "spans restored");
    converted
}
