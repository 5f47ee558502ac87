//! Whole-document conversions checked against fixture pairs

use std::path::PathBuf;
use tgmd_babel::{ConversionOptions, FormatRegistry, RenderOptions};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

fn convert_fixture(input: &str, format: &str) -> String {
    FormatRegistry::default()
        .convert(
            &fixture(input),
            format,
            "telegram",
            &ConversionOptions::default(),
            &RenderOptions::default(),
        )
        .expect("fixture should convert")
}

#[test]
fn test_release_notes_markdown() {
    assert_eq!(
        convert_fixture("release-notes.md", "markdown"),
        fixture("release-notes.mdv2")
    );
}

#[test]
fn test_announcement_html() {
    assert_eq!(
        convert_fixture("announcement.html", "html"),
        fixture("announcement.mdv2")
    );
}

#[test]
fn test_converted_announcement_validates() {
    let result = tgmd_babel::validate(&fixture("announcement.mdv2"));
    assert!(result.is_valid, "{:?}", result.errors);
}
