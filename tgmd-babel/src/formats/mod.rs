//! Format implementations
//!
//! Each module describes one dialect relative to MarkdownV2.

pub mod html;
pub mod markdown;
pub mod telegram;
pub mod text;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
pub use telegram::TelegramFormat;
pub use text::TextFormat;
