use std::time::{Duration, Instant};

use crate::query::debouncer::Debouncer;

/// Turns query-line edits into evaluation requests
///
/// Edits are debounced; a submit cancels whatever is pending and hands the
/// expression back for immediate evaluation.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    debouncer: Debouncer,
}

impl InputController {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(quiet_period),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.debouncer.quiet_period()
    }

    pub fn on_keystroke(&mut self, raw: &str, now: Instant) {
        self.debouncer.schedule(raw.trim().to_string(), now);
    }

    /// Returns the expression to evaluate right away
    pub fn on_submit(&mut self, raw: &str) -> String {
        self.debouncer.cancel();
        raw.trim().to_string()
    }

    /// Expression whose quiet period has elapsed, if any
    pub fn poll_due(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll_due(now)
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.has_pending()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
