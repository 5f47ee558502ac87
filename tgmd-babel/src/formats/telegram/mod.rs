//! MarkdownV2 itself
//!
//! The hub format: reading and writing are both the identity. Registering it lets
//! the registry validate MarkdownV2 files as input, or render any dialect straight
//! to MarkdownV2 output.

use crate::error::FormatError;
use crate::format::Format;
use crate::options::{ConversionOptions, RenderOptions};

/// Format implementation for Telegram MarkdownV2
pub struct TelegramFormat;

impl Format for TelegramFormat {
    fn name(&self) -> &str {
        "telegram"
    }

    fn description(&self) -> &str {
        "Telegram MarkdownV2"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tg", "mdv2"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, _options: &ConversionOptions) -> Result<String, FormatError> {
        Ok(source.to_string())
    }

    fn serialize(&self, source: &str, _options: &RenderOptions) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}
