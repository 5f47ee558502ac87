//! MarkdownV2 to HTML

use crate::common::render::{render, HtmlRenderer};
use crate::options::RenderOptions;

/// Render MarkdownV2 as Telegram's HTML subset, then apply the entity mappings.
pub fn serialize_to_html(source: &str, options: &RenderOptions) -> String {
    let html = render(source, &HtmlRenderer);
    options.apply_mappings(html)
}
