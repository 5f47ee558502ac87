//! Markdown format implementation
//!
//! Reads a GitHub-flavored subset of Markdown into MarkdownV2. There is no Markdown
//! AST: the pipeline in [`parser`] shields links and code, rewrites delimiters in a
//! fixed rule order, escapes what is left, and puts the shielded spans back.
//!
//! # Element Mapping Table
//!
//! | Markdown            | MarkdownV2    | Notes                                      |
//! |---------------------|---------------|--------------------------------------------|
//! | `***x***`           | `*_x_*`       |                                            |
//! | `**x**`, `__x__`    | `*x*`         |                                            |
//! | `*x*`               | `_x_`         | single line only                           |
//! | `# x` .. `###### x` | `*x*`         | heading level is lost                      |
//! | `~~x~~`             | `~x~`         |                                            |
//! | `[x](url)`          | `[x](url)`    | copied verbatim, target never escaped      |
//! | `` `x` ``           | `` `x` ``     | copied verbatim                            |
//! | fenced code         | bare fence    | language tag dropped, body trimmed         |
//!
//! Lists, tables, block quotes and nested emphasis are not recognized; their
//! characters are escaped as literal text.
//!
//! Writing Markdown back out is not supported: MarkdownV2 to Markdown is not a
//! meaningful inverse (headers are indistinguishable from bold once converted).

pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use crate::options::ConversionOptions;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "GitHub-flavored Markdown subset"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: &ConversionOptions) -> Result<String, FormatError> {
        Ok(parser::parse_from_markdown(source, options))
    }
}
