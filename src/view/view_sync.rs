use serde_json::Value;

use super::banner::{ErrorBanner, INVALID_EXPRESSION_MESSAGE};
use crate::history::HistoryTracker;
use crate::query::evaluator::{Evaluator, Outcome, try_evaluate};

/// Anything that can display a JSON value as an expandable tree
pub trait Renderer {
    /// Replace the displayed content with `value`
    fn render(&mut self, value: &Value);

    /// Open every node of the displayed content
    fn expand_all(&mut self);
}

/// What a call to [`ViewSynchronizer::apply`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// Empty expression, full document shown
    Reset,
    /// Expression matched, result shown
    Matched,
    /// Expression failed, previous view kept
    Failed,
}

/// Keeps the renderer and error banner in step with the latest expression
pub struct ViewSynchronizer<R> {
    renderer: R,
    banner: ErrorBanner,
    displayed: Option<Value>,
}

impl<R: Renderer> ViewSynchronizer<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            banner: ErrorBanner::new(),
            displayed: None,
        }
    }

    /// Show the result of `expression` against `document`
    ///
    /// The banner is always cleared first. A failing expression leaves the
    /// rendered view exactly as it was and only sets the banner.
    pub fn apply<E: Evaluator + ?Sized>(
        &mut self,
        document: &Value,
        evaluator: &E,
        history: &mut HistoryTracker,
        expression: &str,
    ) -> ApplyResult {
        self.banner.clear();

        if expression.is_empty() {
            self.display(document.clone());
            return ApplyResult::Reset;
        }

        match try_evaluate(evaluator, document, expression) {
            Outcome::Matched(result) => {
                self.display(result);
                history.record(expression);
                ApplyResult::Matched
            }
            Outcome::Failed(_) => {
                self.banner.show(INVALID_EXPRESSION_MESSAGE);
                ApplyResult::Failed
            }
        }
    }

    fn display(&mut self, value: Value) {
        self.renderer.render(&value);
        self.renderer.expand_all();
        self.displayed = Some(value);
    }

    /// The value currently on screen
    pub fn displayed(&self) -> Option<&Value> {
        self.displayed.as_ref()
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    pub fn banner_mut(&mut self) -> &mut ErrorBanner {
        &mut self.banner
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
#[path = "view_sync_tests.rs"]
mod view_sync_tests;
