//! HTML format implementation
//!
//! Both directions cover the small HTML subset Telegram itself understands.
//!
//! # Element Mapping Table
//!
//! | HTML                                     | MarkdownV2    | Import | Export                          |
//! |------------------------------------------|---------------|--------|---------------------------------|
//! | `<strong>`, `<b>`                        | `*x*`         | yes    | `<strong>`                      |
//! | `<em>`, `<i>`                            | `_x_`         | yes    | `<em>`                          |
//! | `<u>`                                    | `__x__`       | yes    | `<u>`                           |
//! | `<s>`, `<strike>`, `<del>`               | `~x~`         | yes    | `<s>`                           |
//! | `<span class="spoiler">`, `<tg-spoiler>` | `\|\|x\|\|`   | yes    | `<span class="spoiler">`        |
//! | `<code>`                                 | `` `x` ``     | yes    | `<code>`                        |
//! | `<pre>`, `<pre><code>`                   | fenced code   | yes    | `<pre><code class="language-x">`|
//! | `<a href>`                               | `[x](url)`    | yes    | `<a href>`                      |
//! | `<br>`                                   | newline       | yes    | newline                         |
//!
//! Import is a tag-level rewrite into Markdown followed by the regular Markdown
//! conversion, so any Markdown mixed into the HTML is converted too. Unknown tags are
//! kept as text (and escaped). Export HTML-escapes literal text and then applies the
//! configured entity mappings in order.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::parser::parse_from_markdown;
use crate::options::{ConversionOptions, RenderOptions};

/// Format implementation for HTML
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Telegram HTML subset"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str, options: &ConversionOptions) -> Result<String, FormatError> {
        let options = ConversionOptions {
            convert_html_tags: true,
            ..*options
        };
        Ok(parse_from_markdown(source, &options))
    }

    fn serialize(&self, source: &str, options: &RenderOptions) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_html(source, options))
    }
}
