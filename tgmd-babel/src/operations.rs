//! Named operations and batch execution
//!
//! This is the boundary a host (the CLI, a workflow engine) talks to. Operations are
//! looked up by name; an unknown name is the only input the engine rejects outright.
//!
//! | Operation       | Input       | Output                          |
//! |-----------------|-------------|---------------------------------|
//! | `convert`       | Markdown    | MarkdownV2                      |
//! | `escape`        | plain text  | MarkdownV2 with everything escaped |
//! | `validate`      | MarkdownV2  | validation result               |
//! | `to-html`       | MarkdownV2  | HTML subset                     |
//! | `to-plain-text` | MarkdownV2  | text without formatting         |
//!
//! Every item of a batch runs with fresh state; nothing carries over between items.

use crate::common::escape::escape_all;
use crate::common::render::{render, PlainTextRenderer};
use crate::common::validate::{validate_with, ValidationResult};
use crate::error::FormatError;
use crate::formats::html::serializer::serialize_to_html;
use crate::formats::markdown::parser::parse_from_markdown;
use crate::options::{ConversionOptions, RenderOptions, ValidationOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// All operations, with a one-line description each
pub const AVAILABLE_OPERATIONS: &[(&str, &str)] = &[
    ("convert", "Convert Markdown to Telegram MarkdownV2"),
    ("escape", "Escape every MarkdownV2 special character"),
    ("validate", "Check MarkdownV2 for formatting problems"),
    ("to-html", "Render MarkdownV2 as HTML"),
    ("to-plain-text", "Strip MarkdownV2 formatting"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Convert,
    Escape,
    Validate,
    ToHtml,
    ToPlainText,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Convert => "convert",
            Operation::Escape => "escape",
            Operation::Validate => "validate",
            Operation::ToHtml => "to-html",
            Operation::ToPlainText => "to-plain-text",
        }
    }
}

impl FromStr for Operation {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "convert" => Ok(Operation::Convert),
            "escape" => Ok(Operation::Escape),
            "validate" => Ok(Operation::Validate),
            "to-html" => Ok(Operation::ToHtml),
            "to-plain-text" => Ok(Operation::ToPlainText),
            other => Err(FormatError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything an operation may need, built once per call
#[derive(Debug, Clone, Default)]
pub struct OperationOptions {
    pub conversion: ConversionOptions,
    pub render: RenderOptions,
    pub validation: ValidationOptions,
}

/// Result of one operation, tagged by operation name when serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum OperationOutput {
    Convert {
        original_text: String,
        converted_text: String,
    },
    Escape {
        original_text: String,
        escaped_text: String,
    },
    Validate {
        original_text: String,
        #[serde(flatten)]
        validation: ValidationResult,
    },
    ToHtml {
        original_text: String,
        html: String,
    },
    ToPlainText {
        original_text: String,
        plain_text: String,
    },
}

impl OperationOutput {
    /// The primary text result; `None` for validation.
    pub fn text(&self) -> Option<&str> {
        match self {
            OperationOutput::Convert { converted_text, .. } => Some(converted_text),
            OperationOutput::Escape { escaped_text, .. } => Some(escaped_text),
            OperationOutput::ToHtml { html, .. } => Some(html),
            OperationOutput::ToPlainText { plain_text, .. } => Some(plain_text),
            OperationOutput::Validate { .. } => None,
        }
    }
}

/// Run `operation` on `text`. Absent text is treated as empty.
pub fn run(operation: Operation, text: Option<&str>, options: &OperationOptions) -> OperationOutput {
    let original_text = text.unwrap_or_default().to_string();
    tracing::debug!(%operation, len = original_text.len(), "running operation");

    match operation {
        Operation::Convert => OperationOutput::Convert {
            converted_text: parse_from_markdown(&original_text, &options.conversion),
            original_text,
        },
        Operation::Escape => OperationOutput::Escape {
            escaped_text: escape_all(&original_text),
            original_text,
        },
        Operation::Validate => OperationOutput::Validate {
            validation: validate_with(&original_text, &options.validation),
            original_text,
        },
        Operation::ToHtml => OperationOutput::ToHtml {
            html: serialize_to_html(&original_text, &options.render),
            original_text,
        },
        Operation::ToPlainText => OperationOutput::ToPlainText {
            plain_text: render(&original_text, &PlainTextRenderer),
            original_text,
        },
    }
}

/// Look up `name` and run it.
pub fn execute_operation(
    name: &str,
    text: Option<&str>,
    options: &OperationOptions,
) -> Result<OperationOutput, FormatError> {
    let operation = name.parse::<Operation>()?;
    Ok(run(operation, text, options))
}

/// One unit of work in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    pub operation: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Done(OperationOutput),
    Failed { error: String },
}

/// Outcome of one batch item, paired with the item's position in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub paired_item: usize,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

/// Run every item independently.
///
/// With `continue_on_fail`, a failing item yields a [`BatchOutcome::Failed`] entry
/// and the rest still run; otherwise the first failure is returned.
#[tracing::instrument(level = "debug", skip_all, fields(items = items.len(), continue_on_fail = continue_on_fail))]
pub fn run_batch(
    items: &[BatchItem],
    options: &OperationOptions,
    continue_on_fail: bool,
) -> Result<Vec<BatchResult>, FormatError> {
    let mut results = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let outcome = match execute_operation(&item.operation, item.text.as_deref(), options) {
            Ok(output) => BatchOutcome::Done(output),
            Err(err) if continue_on_fail => {
                tracing::warn!(item = index, error = %err, "batch item failed");
                BatchOutcome::Failed {
                    error: err.to_string(),
                }
            }
            Err(err) => return Err(err),
        };
        results.push(BatchResult {
            paired_item: index,
            outcome,
        });
    }

    Ok(results)
}
