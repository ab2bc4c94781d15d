//! One exploration session over a single document

mod controller;

pub use controller::InputController;

use std::time::{Duration, Instant};

use serde_json::Value;

use crate::history::HistoryTracker;
use crate::query::Evaluator;
use crate::view::{ApplyResult, ErrorBanner, Renderer, ViewSynchronizer};

/// Owns the document and everything that reacts to the query line
pub struct Session<R> {
    document: Value,
    evaluator: Box<dyn Evaluator>,
    view: ViewSynchronizer<R>,
    history: HistoryTracker,
    controller: InputController,
}

impl<R: Renderer> Session<R> {
    /// Start a session showing the full document
    pub fn new(
        document: Value,
        evaluator: Box<dyn Evaluator>,
        renderer: R,
        quiet_period: Duration,
    ) -> Self {
        let mut session = Self {
            document,
            evaluator,
            view: ViewSynchronizer::new(renderer),
            history: HistoryTracker::new(),
            controller: InputController::new(quiet_period),
        };
        session.apply("");
        session
    }

    /// The query line changed
    pub fn on_keystroke(&mut self, raw: &str) {
        self.on_keystroke_at(raw, Instant::now());
    }

    pub fn on_keystroke_at(&mut self, raw: &str, now: Instant) {
        self.controller.on_keystroke(raw, now);
    }

    /// Explicit commit: evaluate the current text now
    pub fn on_submit(&mut self, raw: &str) -> ApplyResult {
        let expression = self.controller.on_submit(raw);
        self.apply(&expression)
    }

    /// Run the pending evaluation if its quiet period is over
    pub fn tick(&mut self) -> Option<ApplyResult> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<ApplyResult> {
        let expression = self.controller.poll_due(now)?;
        Some(self.apply(&expression))
    }

    /// How long the event loop may wait for input before the next tick is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.controller.time_until_due(now)
    }

    pub fn has_pending(&self) -> bool {
        self.controller.has_pending()
    }

    pub fn apply(&mut self, expression: &str) -> ApplyResult {
        let result = self.view.apply(
            &self.document,
            self.evaluator.as_ref(),
            &mut self.history,
            expression,
        );
        log::debug!("Applied {:?}: {:?}", expression, result);
        result
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn displayed(&self) -> Option<&Value> {
        self.view.displayed()
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn banner(&self) -> &ErrorBanner {
        self.view.banner()
    }

    pub fn banner_mut(&mut self) -> &mut ErrorBanner {
        self.view.banner_mut()
    }

    pub fn renderer(&self) -> &R {
        self.view.renderer()
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        self.view.renderer_mut()
    }

    pub fn quiet_period(&self) -> Duration {
        self.controller.quiet_period()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
