//! End-to-end row enrichment tests against an on-disk eval queue.
//!
//! These tests build a real queue directory with tempfile and verify the
//! terminal annotation state of each row beyond the unit test level.

use std::fs;
use std::path::Path;

use leaderboard::enrich::{
    TypeAnnotator, DELTA_SYMBOL, MODEL_TYPE_COL, MODEL_TYPE_SYMBOL_COL, UNKNOWN_TYPE_LABEL,
    UNKNOWN_TYPE_SYMBOL,
};
use leaderboard::Row;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Build a row with the given model identifier
fn row(model_name: &str) -> Row {
    json!({ "model_name_for_query": model_name })
        .as_object()
        .cloned()
        .unwrap()
}

/// Write a request file for `model_name` with the given JSON body
fn write_request(queue: &Path, model_name: &str, suffix: &str, body: &str) {
    let path = queue.join(format!("{model_name}_eval_request_{suffix}.json"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn label_of(row: &Row) -> &str {
    row[MODEL_TYPE_COL].as_str().unwrap()
}

fn symbol_of(row: &Row) -> &str {
    row[MODEL_TYPE_SYMBOL_COL].as_str().unwrap()
}

#[test]
fn test_missing_request_file_yields_blank() {
    let queue = TempDir::new().unwrap();
    let annotator = TypeAnnotator::new(queue.path());

    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), "");
    assert_eq!(symbol_of(&rows[0]), "");
}

#[test]
fn test_original_weights_get_plain_symbol() {
    let queue = TempDir::new().unwrap();
    write_request(
        queue.path(),
        "foo/bar",
        "float16",
        r#"{"weight_type": "Original", "model_type": "pretrained"}"#,
    );

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), "pretrained");
    assert_eq!(symbol_of(&rows[0]), "🟢");
}

#[test]
fn test_delta_weights_get_delta_marker() {
    let queue = TempDir::new().unwrap();
    write_request(
        queue.path(),
        "foo/bar",
        "float16",
        r#"{"weight_type": "Delta", "model_type": "pretrained"}"#,
    );

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), "pretrained");
    assert_eq!(symbol_of(&rows[0]), "🟢🔺");
    assert!(symbol_of(&rows[0]).ends_with(DELTA_SYMBOL));
}

#[test]
fn test_invalid_json_yields_unknown_sentinel() {
    let queue = TempDir::new().unwrap();
    write_request(queue.path(), "foo/bar", "float16", "{not json");

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), UNKNOWN_TYPE_LABEL);
    assert_eq!(symbol_of(&rows[0]), UNKNOWN_TYPE_SYMBOL);
}

#[test]
fn test_missing_model_type_yields_unknown_sentinel() {
    let queue = TempDir::new().unwrap();
    write_request(
        queue.path(),
        "foo/bar",
        "float16",
        r#"{"weight_type": "Original"}"#,
    );

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), UNKNOWN_TYPE_LABEL);
    assert_eq!(symbol_of(&rows[0]), UNKNOWN_TYPE_SYMBOL);
}

#[test]
fn test_unrecognized_model_type_yields_unknown_sentinel() {
    let queue = TempDir::new().unwrap();
    write_request(
        queue.path(),
        "foo/bar",
        "float16",
        r#"{"weight_type": "Original", "model_type": "merged"}"#,
    );

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), UNKNOWN_TYPE_LABEL);
    assert_eq!(symbol_of(&rows[0]), UNKNOWN_TYPE_SYMBOL);
}

#[test]
fn test_missing_weight_type_is_not_a_delta() {
    let queue = TempDir::new().unwrap();
    write_request(
        queue.path(),
        "foo/bar",
        "float16",
        r#"{"model_type": "RL-tuned"}"#,
    );

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), "RL-tuned");
    assert_eq!(symbol_of(&rows[0]), "🟦");
}

#[test]
fn test_mixed_rows_preserve_order_and_count() {
    let queue = TempDir::new().unwrap();
    write_request(
        queue.path(),
        "org/labeled",
        "bfloat16",
        r#"{"weight_type": "Original", "model_type": "instruction-tuned"}"#,
    );
    write_request(queue.path(), "org/broken", "bfloat16", "???");

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("org/labeled"), row("org/missing"), row("org/broken")];
    annotator.annotate(&mut rows);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["model_name_for_query"], json!("org/labeled"));
    assert_eq!(rows[1]["model_name_for_query"], json!("org/missing"));
    assert_eq!(rows[2]["model_name_for_query"], json!("org/broken"));

    assert_eq!(label_of(&rows[0]), "instruction-tuned");
    assert_eq!(symbol_of(&rows[0]), "⭕");
    assert_eq!(label_of(&rows[1]), "");
    assert_eq!(symbol_of(&rows[1]), "");
    assert_eq!(label_of(&rows[2]), UNKNOWN_TYPE_LABEL);
}

#[test]
fn test_multiple_request_files_pick_exactly_one() {
    let queue = TempDir::new().unwrap();
    // Two submissions with the same type; tie-break among them is
    // unspecified so both fixtures agree on the outcome.
    write_request(
        queue.path(),
        "foo/bar",
        "2023-08-01",
        r#"{"weight_type": "Original", "model_type": "fine-tuned"}"#,
    );
    write_request(
        queue.path(),
        "foo/bar",
        "2023-08-02",
        r#"{"weight_type": "Original", "model_type": "fine-tuned"}"#,
    );

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![row("foo/bar")];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), "fine-tuned");
    assert_eq!(symbol_of(&rows[0]), "🔶");
}

#[test]
fn test_row_without_model_name_gets_blank_columns() {
    let queue = TempDir::new().unwrap();
    let annotator = TypeAnnotator::new(queue.path());

    let mut rows = vec![json!({ "eval_score": 41.2 }).as_object().cloned().unwrap()];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), "");
    assert_eq!(symbol_of(&rows[0]), "");
    // Pre-existing columns are untouched
    assert_eq!(rows[0]["eval_score"], json!(41.2));
}

#[test]
fn test_existing_annotation_columns_are_overwritten() {
    let queue = TempDir::new().unwrap();
    write_request(
        queue.path(),
        "foo/bar",
        "float16",
        r#"{"weight_type": "Original", "model_type": "pretrained"}"#,
    );

    let mut stale = row("foo/bar");
    stale.insert(MODEL_TYPE_COL.to_string(), Value::String("stale".into()));
    stale.insert(MODEL_TYPE_SYMBOL_COL.to_string(), Value::String("?".into()));

    let annotator = TypeAnnotator::new(queue.path());
    let mut rows = vec![stale];
    annotator.annotate(&mut rows);

    assert_eq!(label_of(&rows[0]), "pretrained");
    assert_eq!(symbol_of(&rows[0]), "🟢");
}
