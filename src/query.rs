pub mod debouncer;
pub mod evaluator;
pub mod executor;
pub mod path;

// Re-export public types
pub use debouncer::{DEFAULT_QUIET_PERIOD, Debouncer, ScheduledTask};
pub use evaluator::{Evaluator, Outcome, try_evaluate};
pub use executor::{DEFAULT_JQ_TIMEOUT, JqEvaluator};
pub use path::PathEvaluator;

use crate::config::Engine;
use crate::error::JexError;

/// Build the evaluator for the selected engine
pub fn evaluator_for(engine: Engine) -> Result<Box<dyn Evaluator>, JexError> {
    match engine {
        Engine::Path => Ok(Box::new(PathEvaluator)),
        Engine::Jq => Ok(Box::new(JqEvaluator::locate()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_engine_is_always_available() {
        let evaluator = evaluator_for(Engine::Path).unwrap();
        let doc = json!({"a": {"b": 2}});
        assert_eq!(evaluator.evaluate(&doc, "a.b").unwrap(), json!(2));
    }

    #[test]
    fn test_jq_engine_requires_binary() {
        match evaluator_for(Engine::Jq) {
            Ok(_) => assert!(which::which("jq").is_ok()),
            Err(e) => assert!(matches!(e, JexError::JqNotFound)),
        }
    }
}
