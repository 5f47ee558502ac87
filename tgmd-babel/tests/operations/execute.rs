//! Named operations

use serde_json::json;
use tgmd_babel::operations::{OperationOptions, AVAILABLE_OPERATIONS};
use tgmd_babel::{execute_operation, FormatError, Operation, OperationOutput};

#[test]
fn test_every_listed_operation_runs() {
    let options = OperationOptions::default();
    for (name, _) in AVAILABLE_OPERATIONS {
        assert!(execute_operation(name, Some("*x*"), &options).is_ok(), "{name}");
    }
}

#[test]
fn test_unknown_operation_is_an_error() {
    let err = execute_operation("parseToHtml", Some("x"), &OperationOptions::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown operation: parseToHtml");
    assert!(matches!(err, FormatError::UnknownOperation(_)));
    assert!("".parse::<Operation>().is_err());
}

#[test]
fn test_convert_output_shape() {
    let output =
        execute_operation("convert", Some("**hi**"), &OperationOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({
            "operation": "convert",
            "original_text": "**hi**",
            "converted_text": "*hi*",
        })
    );
}

#[test]
fn test_validate_output_is_flattened() {
    let output = execute_operation("validate", Some("*x"), &OperationOptions::default()).unwrap();
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["operation"], "validate");
    assert_eq!(value["original_text"], "*x");
    assert_eq!(value["isValid"], false);
    assert_eq!(value["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn test_options_reach_the_engine() {
    let mut options = OperationOptions::default();
    options.conversion.auto_escape = false;
    options.validation.strict = true;

    let converted = execute_operation("convert", Some("a.b"), &options).unwrap();
    assert_eq!(converted.text(), Some("a.b"));

    match execute_operation("validate", Some("a ** b"), &options).unwrap() {
        OperationOutput::Validate { validation, .. } => assert!(!validation.is_valid),
        other => panic!("unexpected output {other:?}"),
    }
}

#[test]
fn test_to_html_and_plain_text() {
    let options = OperationOptions::default();
    let html = execute_operation("to-html", Some("_a_"), &options).unwrap();
    assert_eq!(html.text(), Some("<em>a</em>"));
    let plain = execute_operation("to-plain-text", Some("_a_"), &options).unwrap();
    assert_eq!(plain.text(), Some("a"));
}
