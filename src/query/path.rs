//! Built-in path expression engine
//!
//! A compact, JMESPath-flavoured subset:
//!
//! | Expression      | Meaning                                   |
//! |-----------------|-------------------------------------------|
//! | `a.b`           | field access                              |
//! | `"odd key"`     | quoted field (JSON string escapes)        |
//! | `a[0]`, `a[-1]` | index, negative counts from the end       |
//! | `a[1:3]`        | slice (projection)                        |
//! | `a[*].b`        | list projection                           |
//! | `a.*.b`         | object value projection                   |
//! | `a[].b`         | flatten one level, then project           |
//! | `@`             | current node                              |
//! | `a[*].b \| [0]` | pipe, stops the running projection        |
//!
//! Missing fields, out-of-range indices and type mismatches evaluate to `null`;
//! only malformed syntax is an error.

mod parser;

use serde_json::Value;

use crate::error::EvalError;
use crate::query::evaluator::Evaluator;
use parser::Parser;

/// A single navigation step inside a pipe stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Field(String),
    Index(i64),
    Slice(Option<i64>, Option<i64>),
    Wildcard,
    ObjectWildcard,
    Flatten,
    Current,
}

impl Step {
    /// Steps that apply the rest of the stage to every element
    fn is_projection(&self) -> bool {
        matches!(
            self,
            Step::Slice(..) | Step::Wildcard | Step::ObjectWildcard
        )
    }
}

/// Parsed path expression: pipe-separated stages of steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    pub stages: Vec<Vec<Step>>,
}

impl PathExpr {
    pub fn parse(expression: &str) -> Result<Self, EvalError> {
        Parser::new(expression).parse()
    }

    pub fn evaluate(&self, document: &Value) -> Value {
        self.stages
            .iter()
            .fold(document.clone(), |current, steps| eval_stage(&current, steps))
    }
}

/// Flatten binds to everything on its left, so the last `[]` splits the stage
fn eval_stage(value: &Value, steps: &[Step]) -> Value {
    let Some(split) = steps.iter().rposition(|step| *step == Step::Flatten) else {
        return eval_steps(value, steps);
    };

    let (left, right) = (&steps[..split], &steps[split + 1..]);
    match eval_stage(value, left) {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .flat_map(|item| match item {
                    Value::Array(inner) => inner,
                    other => vec![other],
                })
                .map(|item| eval_steps(&item, right))
                .filter(|projected| !projected.is_null())
                .collect(),
        ),
        _ => Value::Null,
    }
}

fn eval_steps(value: &Value, steps: &[Step]) -> Value {
    let Some((step, rest)) = steps.split_first() else {
        return value.clone();
    };

    if step.is_projection() {
        return match project_sources(value, step) {
            Some(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| eval_steps(&item, rest))
                    .filter(|projected| !projected.is_null())
                    .collect(),
            ),
            None => Value::Null,
        };
    }

    let next = match step {
        Step::Field(name) => value.get(name.as_str()).cloned().unwrap_or(Value::Null),
        Step::Index(index) => match value {
            Value::Array(items) => resolve_index(items.len(), *index)
                .map(|i| items[i].clone())
                .unwrap_or(Value::Null),
            _ => Value::Null,
        },
        Step::Current => value.clone(),
        Step::Slice(..) | Step::Wildcard | Step::ObjectWildcard | Step::Flatten => Value::Null,
    };

    if next.is_null() {
        return Value::Null;
    }
    eval_steps(&next, rest)
}

/// Elements a projection step iterates over, or None when the input has the wrong shape
fn project_sources(value: &Value, step: &Step) -> Option<Vec<Value>> {
    match (step, value) {
        (Step::Wildcard, Value::Array(items)) => Some(items.clone()),
        (Step::ObjectWildcard, Value::Object(map)) => Some(map.values().cloned().collect()),
        (Step::Slice(start, stop), Value::Array(items)) => {
            let (from, to) = resolve_slice(items.len(), *start, *stop);
            Some(items[from..to].to_vec())
        }
        _ => None,
    }
}

fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let len = len as i64;
    let resolved = if index < 0 { len + index } else { index };
    (0..len).contains(&resolved).then_some(resolved as usize)
}

fn resolve_slice(len: usize, start: Option<i64>, stop: Option<i64>) -> (usize, usize) {
    let clamp = |bound: i64| -> usize {
        let len = len as i64;
        let resolved = if bound < 0 { len + bound } else { bound };
        resolved.clamp(0, len) as usize
    };

    let from = start.map(clamp).unwrap_or(0);
    let to = stop.map(clamp).unwrap_or(len);
    (from, to.max(from))
}

/// In-process evaluator for path expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct PathEvaluator;

impl Evaluator for PathEvaluator {
    fn evaluate(&self, document: &Value, expression: &str) -> Result<Value, EvalError> {
        let parsed = PathExpr::parse(expression)?;
        Ok(parsed.evaluate(document))
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod path_tests;
