//! Batch execution

use serde_json::json;
use tgmd_babel::operations::{BatchItem, OperationOptions};
use tgmd_babel::run_batch;

fn items(json: serde_json::Value) -> Vec<BatchItem> {
    serde_json::from_value(json).expect("valid batch items")
}

#[test]
fn test_batch_results_are_paired() {
    let batch = items(json!([
        { "operation": "convert", "text": "**a**" },
        { "operation": "escape", "text": "b." },
        { "operation": "validate" },
    ]));
    let results = run_batch(&batch, &OperationOptions::default(), false).unwrap();
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(value[0]["paired_item"], 0);
    assert_eq!(value[0]["converted_text"], "*a*");
    assert_eq!(value[1]["paired_item"], 1);
    assert_eq!(value[1]["escaped_text"], "b\\.");
    assert_eq!(value[2]["paired_item"], 2);
    assert_eq!(value[2]["isValid"], true);
}

#[test]
fn test_failure_aborts_without_continue() {
    let batch = items(json!([{ "operation": "bogus", "text": "x" }]));
    assert!(run_batch(&batch, &OperationOptions::default(), false).is_err());
}

#[test]
fn test_failure_is_recorded_with_continue() {
    let batch = items(json!([
        { "operation": "bogus", "text": "x" },
        { "operation": "convert", "text": "*i*" },
    ]));
    let results = run_batch(&batch, &OperationOptions::default(), true).unwrap();
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(
        value[0],
        json!({ "paired_item": 0, "error": "Unknown operation: bogus" })
    );
    assert_eq!(value[1]["converted_text"], "_i_");
}
