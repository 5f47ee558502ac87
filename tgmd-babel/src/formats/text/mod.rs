//! Plain text format
//!
//! Reading plain text escapes every reserved character, so the result displays
//! literally. Writing plain text strips all MarkdownV2 formatting and escapes,
//! keeping link labels and code content.

use crate::common::escape::escape_all;
use crate::common::render::{render, PlainTextRenderer};
use crate::error::FormatError;
use crate::format::Format;
use crate::options::{ConversionOptions, RenderOptions};

/// Format implementation for plain text
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text without formatting"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, _options: &ConversionOptions) -> Result<String, FormatError> {
        Ok(escape_all(source))
    }

    fn serialize(&self, source: &str, _options: &RenderOptions) -> Result<String, FormatError> {
        Ok(render(source, &PlainTextRenderer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trip_keeps_content() {
        let source = "Price: $10.99 (sale) - 50% off!";
        let escaped = TextFormat
            .parse(source, &ConversionOptions::default())
            .unwrap();
        assert_eq!(escaped, "Price: $10\\.99 \\(sale\\) \\- 50% off\\!");
        let back = TextFormat
            .serialize(&escaped, &RenderOptions::default())
            .unwrap();
        assert_eq!(back, source);
    }
}
