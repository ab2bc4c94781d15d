use serde_json::Value;

use crate::error::EvalError;

/// Something that can run a query expression against a document
pub trait Evaluator {
    fn evaluate(&self, document: &Value, expression: &str) -> Result<Value, EvalError>;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, document: &Value, expression: &str) -> Result<Value, EvalError> {
        (**self).evaluate(document, expression)
    }
}

/// Result of one evaluation attempt
///
/// Any value the evaluator returns is a match, including `null`, `0`, `""` and `[]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Matched(Value),
    Failed(EvalError),
}

impl Outcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }
}

impl From<Result<Value, EvalError>> for Outcome {
    fn from(result: Result<Value, EvalError>) -> Self {
        match result {
            Ok(value) => Outcome::Matched(value),
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// Run a non-empty expression and fold the evaluator's result into an [`Outcome`]
pub fn try_evaluate<E: Evaluator + ?Sized>(
    evaluator: &E,
    document: &Value,
    expression: &str,
) -> Outcome {
    debug_assert!(!expression.is_empty(), "empty expressions never reach the evaluator");

    let outcome = Outcome::from(evaluator.evaluate(document, expression));
    if let Outcome::Failed(reason) = &outcome {
        log::debug!("Expression {:?} failed: {}", expression, reason);
    }
    outcome
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod evaluator_tests;
