//! The dialect-agnostic engine.
//!
//! Conversion into MarkdownV2 is a strict pipeline over whole strings:
//! [`placeholder::extract`] → [`rewrite`] → [`escape`] → [`placeholder::restore`] →
//! [`marker::emit`]. Validation ([`validate`]) and rendering out of MarkdownV2
//! ([`render`]) are separate passes that share the same building blocks.

pub mod escape;
pub mod marker;
pub mod placeholder;
pub mod render;
pub(crate) mod rewrite;
pub mod validate;
