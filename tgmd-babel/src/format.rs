//! Format trait definition
//!
//! Every dialect is described relative to MarkdownV2, the hub all conversions pass
//! through. Parsing reads the dialect and produces MarkdownV2; serialization takes
//! MarkdownV2 and writes the dialect. A format may support either direction or both.

use crate::error::FormatError;
use crate::options::{ConversionOptions, RenderOptions};

/// Trait for text dialects
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Format for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, source: &str, _options: &RenderOptions) -> Result<String, FormatError> {
///         Ok(source.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format can be read into MarkdownV2
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether MarkdownV2 can be written out as this format
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Convert source text in this dialect into MarkdownV2
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str, _options: &ConversionOptions) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Convert MarkdownV2 into this dialect
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _source: &str, _options: &RenderOptions) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
