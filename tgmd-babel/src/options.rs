//! Option types for conversion, rendering and validation
//!
//! Every option type has a documented `Default` and can be built from the flat
//! `key -> value` map the CLI collects from `--extra-<key> <value>` arguments.

use crate::error::FormatError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use crate::common::validate::ValidationOptions;

/// Options for converting Markdown (or the HTML subset) into MarkdownV2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Rewrite the supported HTML tags into Markdown before converting
    pub convert_html_tags: bool,
    /// Backslash-escape literal reserved characters
    pub auto_escape: bool,
    /// Accepted and carried; line breaks are always preserved
    pub preserve_line_breaks: bool,
    /// Accepted and carried; no conversion step reads it
    pub strict_mode: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            convert_html_tags: true,
            auto_escape: true,
            preserve_line_breaks: true,
            strict_mode: false,
        }
    }
}

impl ConversionOptions {
    /// Defaults overridden by any recognized keys in `params`.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut options = Self::default();
        options.apply_params(params)?;
        Ok(options)
    }

    pub fn apply_params(&mut self, params: &HashMap<String, String>) -> Result<(), FormatError> {
        self.convert_html_tags = bool_param(params, "convert-html-tags", self.convert_html_tags)?;
        self.auto_escape = bool_param(params, "auto-escape", self.auto_escape)?;
        self.preserve_line_breaks =
            bool_param(params, "preserve-line-breaks", self.preserve_line_breaks)?;
        self.strict_mode = bool_param(params, "strict-mode", self.strict_mode)?;
        Ok(())
    }
}

impl ValidationOptions {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FormatError> {
        Ok(Self {
            strict: bool_param(params, "strict", false)?,
        })
    }
}

/// A `{ from, to }` pair before its pattern is compiled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMappingSpec {
    pub from: String,
    pub to: String,
}

/// Regex replacement applied to rendered HTML
#[derive(Debug, Clone)]
pub struct EntityMapping {
    pattern: Regex,
    replacement: String,
}

impl EntityMapping {
    pub fn new(from: &str, to: &str) -> Result<Self, FormatError> {
        let pattern = Regex::new(from).map_err(|e| {
            FormatError::InvalidOption(format!("entity mapping pattern '{from}': {e}"))
        })?;
        Ok(Self {
            pattern,
            replacement: to.to_string(),
        })
    }

    pub fn apply(&self, html: &str) -> String {
        self.pattern
            .replace_all(html, self.replacement.as_str())
            .into_owned()
    }
}

impl TryFrom<&EntityMappingSpec> for EntityMapping {
    type Error = FormatError;

    fn try_from(spec: &EntityMappingSpec) -> Result<Self, Self::Error> {
        EntityMapping::new(&spec.from, &spec.to)
    }
}

/// Options for rendering MarkdownV2 into another dialect
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Applied in order to HTML output; ignored by other dialects
    pub entity_mappings: Vec<EntityMapping>,
}

impl RenderOptions {
    /// Compile mapping specs, skipping pairs with an empty side.
    pub fn from_specs(specs: &[EntityMappingSpec]) -> Result<Self, FormatError> {
        let entity_mappings = specs
            .iter()
            .filter(|spec| !spec.from.is_empty() && !spec.to.is_empty())
            .map(EntityMapping::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entity_mappings })
    }

    pub fn apply_mappings(&self, html: String) -> String {
        self.entity_mappings
            .iter()
            .fold(html, |html, mapping| mapping.apply(&html))
    }
}

/// Interpret a boolean flag value. An empty value means the bare flag was given.
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, FormatError> {
    if raw.is_empty() {
        return Ok(true);
    }
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::InvalidOption(format!(
            "Invalid boolean value '{other}' for --extra-{key}"
        ))),
    }
}

fn bool_param(
    params: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match params.get(key) {
        Some(raw) => parse_bool(key, raw),
        None => Ok(default),
    }
}
