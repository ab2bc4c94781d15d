//! Tests for the jq-backed evaluator
//!
//! Tests that spawn jq are skipped when it is not installed.

use super::*;
use serde_json::json;

fn jq() -> Option<JqEvaluator> {
    JqEvaluator::locate().ok()
}

#[test]
fn test_collect_single_value() {
    assert_eq!(collect_outputs("[1,2,3]\n").unwrap(), json!([1, 2, 3]));
}

#[test]
fn test_collect_multiple_values_into_array() {
    assert_eq!(
        collect_outputs("1\n\"two\"\n{\"three\":3}\n").unwrap(),
        json!([1, "two", {"three": 3}])
    );
}

#[test]
fn test_collect_empty_output_is_null() {
    assert_eq!(collect_outputs("").unwrap(), Value::Null);
    assert_eq!(collect_outputs("\n").unwrap(), Value::Null);
}

#[test]
fn test_collect_rejects_garbage() {
    assert!(matches!(collect_outputs("{oops"), Err(EvalError::Jq(_))));
}

#[test]
fn test_missing_binary_fails_to_spawn() {
    let evaluator = JqEvaluator::with_path(PathBuf::from("/nonexistent/jq-binary"));
    let result = evaluator.evaluate(&json!({}), ".");
    match result {
        Err(EvalError::Jq(msg)) => assert!(msg.contains("failed to spawn jq")),
        other => panic!("expected spawn failure, got {:?}", other),
    }
}

#[test]
fn test_jq_field_access() {
    let Some(evaluator) = jq() else { return };
    let doc = json!({"a": 1, "b": [1, 2, 3]});
    assert_eq!(evaluator.evaluate(&doc, ".b").unwrap(), json!([1, 2, 3]));
}

#[test]
fn test_jq_iteration_collects_outputs() {
    let Some(evaluator) = jq() else { return };
    let doc = json!({"b": [1, 2, 3]});
    assert_eq!(evaluator.evaluate(&doc, ".b[]").unwrap(), json!([1, 2, 3]));
}

#[test]
fn test_jq_empty_output_is_null() {
    let Some(evaluator) = jq() else { return };
    let doc = json!({"b": [1, 2, 3]});
    assert_eq!(evaluator.evaluate(&doc, "empty").unwrap(), Value::Null);
}

#[test]
fn test_jq_syntax_error() {
    let Some(evaluator) = jq() else { return };
    let doc = json!({"a": 1});
    match evaluator.evaluate(&doc, ".[invalid syntax") {
        Err(EvalError::Jq(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected jq error, got {:?}", other),
    }
}

#[test]
fn test_jq_runaway_filter_is_killed_at_deadline() {
    let Some(evaluator) = jq() else { return };
    let evaluator = evaluator.with_timeout(Duration::from_millis(200));

    let start = Instant::now();
    let result = evaluator.evaluate(&json!(1), "last(range(1e12))");

    assert_eq!(result, Err(EvalError::Jq("timed out".to_string())));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_jq_large_output_finishes_before_deadline() {
    let Some(evaluator) = jq() else { return };
    let result = evaluator.evaluate(&json!(null), "[range(100000)]").unwrap();
    assert_eq!(result.as_array().map(Vec::len), Some(100000));
}

#[test]
fn test_default_timeout() {
    let evaluator = JqEvaluator::with_path(PathBuf::from("jq"));
    assert_eq!(evaluator.timeout, DEFAULT_JQ_TIMEOUT);
}
