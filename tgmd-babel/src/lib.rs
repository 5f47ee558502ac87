//! Conversion, escaping and validation for Telegram MarkdownV2
//!
//!     This crate converts text between three lightweight markup dialects: a
//!     GitHub-flavored subset of Markdown, Telegram's MarkdownV2, and the small HTML
//!     subset Telegram accepts. It also validates that a string follows MarkdownV2's
//!     escaping rules.
//!
//!     This is a pure lib, that is, it powers tgmd-cli but is shell agnostic: no code
//!     here prints, reads env vars or touches the filesystem. Every entry point is a
//!     function of its input and options; nothing is cached between calls.
//!
//! Architecture
//!
//!     MarkdownV2 is the hub. Each dialect is a [`Format`] that can be read into
//!     MarkdownV2, written out of it, or both, and the [`FormatRegistry`] chains two
//!     formats through the hub.
//!
//!     The dialect-agnostic engine lives in ./common:
//!
//!     - placeholder.rs: cuts links and code out of the text behind opaque tokens and
//!       puts them back afterwards.
//!     - rewrite.rs: the ordered delimiter rules (Markdown → MarkdownV2).
//!     - marker.rs: structural markers are deferred as private-use sentinels until
//!       escaping is done, so the escaper never has to tell a structural `*` from a
//!       literal one.
//!     - escape.rs: the total escaper and the conversion-aware literal escaper.
//!     - validate.rs: read-only checks producing a [`ValidationResult`].
//!     - render.rs: MarkdownV2 → HTML or plain text through a [`Renderer`].
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── options.rs              # Conversion, render and validation options
//!     ├── operations.rs           # Named operations and batch execution
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # <format> → MarkdownV2
//!     │   │   ├── serializer.rs   # MarkdownV2 → <format>
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!     └── common                  # The engine
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Known Limits
//!
//!     The rewrite is a fixed chain of patterns, not a grammar. Nested or interleaved
//!     delimiters of different kinds are handled by rule order alone, and the
//!     validator's nesting check is a heuristic that both over- and under-reports.
//!     `escape_literal_text` is not idempotent: escaping twice escapes the backslashes
//!     added by the first pass.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod operations;
pub mod options;
pub mod registry;

pub use common::render::{HtmlRenderer, PlainTextRenderer, Renderer};
pub use common::validate::ValidationResult;
pub use error::FormatError;
pub use format::Format;
pub use operations::{execute_operation, run_batch, BatchItem, Operation, OperationOutput};
pub use options::{ConversionOptions, RenderOptions, ValidationOptions};
pub use registry::FormatRegistry;

/// Convert Markdown to MarkdownV2.
pub fn convert_markdown(text: &str, options: &ConversionOptions) -> String {
    formats::markdown::parser::parse_from_markdown(text, options)
}

/// Escape every MarkdownV2 reserved character (and every backslash) in `text`.
pub fn escape_literal_text(text: &str) -> String {
    common::escape::escape_all(text)
}

/// Check MarkdownV2 text with the default (non-strict) checks.
pub fn validate(text: &str) -> ValidationResult {
    common::validate::validate(text)
}

pub fn validate_with(text: &str, options: &ValidationOptions) -> ValidationResult {
    common::validate::validate_with(text, options)
}

/// Render MarkdownV2 as HTML.
pub fn to_html(text: &str, options: &RenderOptions) -> String {
    formats::html::serializer::serialize_to_html(text, options)
}

/// Strip MarkdownV2 formatting, keeping content.
pub fn to_plain_text(text: &str) -> String {
    common::render::render(text, &PlainTextRenderer)
}
