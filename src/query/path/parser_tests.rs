//! Tests for path expression parsing

use super::*;

fn parse(src: &str) -> Result<PathExpr, EvalError> {
    Parser::new(src).parse()
}

fn single_stage(src: &str) -> Vec<Step> {
    let mut expr = parse(src).unwrap();
    assert_eq!(expr.stages.len(), 1, "expected one stage for {:?}", src);
    expr.stages.remove(0)
}

#[test]
fn test_single_identifier() {
    assert_eq!(single_stage("b"), vec![Step::Field("b".to_string())]);
}

#[test]
fn test_dotted_fields_with_whitespace() {
    assert_eq!(
        single_stage(" a . b_2 "),
        vec![Step::Field("a".to_string()), Step::Field("b_2".to_string())]
    );
}

#[test]
fn test_quoted_identifier_unescapes() {
    assert_eq!(
        single_stage(r#""first name"."say \"hi\"""#),
        vec![
            Step::Field("first name".to_string()),
            Step::Field("say \"hi\"".to_string())
        ]
    );
}

#[test]
fn test_brackets() {
    assert_eq!(
        single_stage("a[0][-1][*][][1:][:2][-2:-1]"),
        vec![
            Step::Field("a".to_string()),
            Step::Index(0),
            Step::Index(-1),
            Step::Wildcard,
            Step::Flatten,
            Step::Slice(Some(1), None),
            Step::Slice(None, Some(2)),
            Step::Slice(Some(-2), Some(-1)),
        ]
    );
}

#[test]
fn test_leading_bracket_and_wildcards() {
    assert_eq!(
        single_stage("[*].*.@"),
        vec![Step::Wildcard, Step::ObjectWildcard, Step::Current]
    );
    assert_eq!(single_stage("*"), vec![Step::ObjectWildcard]);
}

#[test]
fn test_pipe_splits_stages() {
    let expr = parse("items[*].name | [0]").unwrap();
    assert_eq!(
        expr.stages,
        vec![
            vec![
                Step::Field("items".to_string()),
                Step::Wildcard,
                Step::Field("name".to_string())
            ],
            vec![Step::Index(0)],
        ]
    );
}

#[test]
fn test_unbalanced_call_syntax_is_rejected() {
    let err = parse("c.invalidSyntax((").unwrap_err();
    assert_eq!(
        err,
        EvalError::Parse {
            offset: 15,
            message: "unexpected '('".to_string()
        }
    );
}

#[test]
fn test_malformed_expressions_are_rejected() {
    for src in [
        "", "   ", "a.", "a..b", ".a", "a[", "a[x]", "a[1", "a |", "| a", "a b", "\"open", "a[-]",
        "a[99999999999999999999]",
    ] {
        assert!(
            matches!(parse(src), Err(EvalError::Parse { .. })),
            "expected parse error for {:?}",
            src
        );
    }
}

#[test]
fn test_error_offset_points_at_problem() {
    match parse("a.b[x]") {
        Err(EvalError::Parse { offset, .. }) => assert_eq!(offset, 4),
        other => panic!("expected parse error, got {:?}", other),
    }
}
