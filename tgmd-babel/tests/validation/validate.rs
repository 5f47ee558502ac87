//! MarkdownV2 validation through the public API

use tgmd_babel::{validate, validate_with, ValidationOptions};

#[test]
fn test_valid_formatting() {
    let result = validate("*bold* and _italic_");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_empty_text() {
    let result = validate("");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_unmatched_bold() {
    let result = validate("*unmatched bold");
    assert!(!result.is_valid);
    let bold: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.starts_with("Unmatched bold"))
        .collect();
    assert_eq!(bold.len(), 1);
}

#[test]
fn test_unescaped_character_warning() {
    let result = validate("Text with unescaped * character");
    assert!(!result.warnings.is_empty());
    assert!(result.warnings[0].contains('*'));
}

#[test]
fn test_suggestions_are_always_present() {
    assert!(!validate("*bold* _italic_").suggestions.is_empty());
    assert!(!validate("a.b").suggestions.is_empty());
}

#[test]
fn test_invalid_url_warning() {
    let result = validate("[Link](invalid-url)");
    assert!(result.warnings.iter().any(|w| w.contains("invalid URL")));
    assert!(result
        .suggestions
        .iter()
        .any(|s| s.contains("http://, https://, or tg://")));
}

#[test]
fn test_valid_url_has_no_url_warning() {
    let result = validate("[Link](https://example.com)");
    assert_eq!(
        result
            .warnings
            .iter()
            .filter(|w| w.contains("invalid URL"))
            .count(),
        0
    );
}

#[test]
fn test_every_delimiter_kind_is_checked() {
    let result = validate("*a _b __c ~d `e ||f");
    let kinds: Vec<_> = result
        .errors
        .iter()
        .map(|e| e.split_whitespace().nth(1).unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        kinds,
        vec!["bold", "italic", "underline", "strikethrough", "code", "spoiler"]
    );
}

#[test]
fn test_strict_checks_are_opt_in() {
    let text = "empty ~~ pair and [label] alone";
    let relaxed = validate(text);
    assert!(relaxed.is_valid);

    let strict = validate_with(text, &ValidationOptions { strict: true });
    assert!(!strict.is_valid);
    assert_eq!(strict.errors, vec!["Empty strikethrough formatting: ~~"]);
    assert!(strict
        .warnings
        .contains(&"Link text without URL: [label]".to_string()));
}

#[test]
fn test_result_serializes_camel_case() {
    let json = serde_json::to_value(validate("")).unwrap();
    assert_eq!(json["isValid"], serde_json::Value::Bool(true));
    assert!(json["errors"].as_array().unwrap().is_empty());
}
