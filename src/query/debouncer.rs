use std::time::{Duration, Instant};

use crate::config::DEFAULT_DEBOUNCE_MS;

/// Quiet period used when nothing else is configured
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Pending,
    Fired,
    Cancelled,
}

/// A deferred evaluation of one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    expression: String,
    due: Instant,
    state: TaskState,
}

impl ScheduledTask {
    fn new(expression: String, due: Instant) -> Self {
        Self {
            expression,
            due,
            state: TaskState::Pending,
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_pending(&self) -> bool {
        self.state == TaskState::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == TaskState::Cancelled
    }

    /// Prevent the task from firing. Safe to call on a fired or cancelled task.
    pub fn cancel(&mut self) {
        if self.state == TaskState::Pending {
            self.state = TaskState::Cancelled;
        }
    }

    /// Fire the task if it is still pending and due
    fn fire(&mut self, now: Instant) -> Option<String> {
        if self.state != TaskState::Pending || now < self.due {
            return None;
        }
        self.state = TaskState::Fired;
        Some(std::mem::take(&mut self.expression))
    }
}

/// Holds at most one scheduled evaluation; scheduling replaces the previous one
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    task: Option<ScheduledTask>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            task: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Cancel whatever is pending and schedule `expression` one quiet period after `now`
    pub fn schedule(&mut self, expression: String, now: Instant) {
        if let Some(previous) = self.task.as_mut().filter(|task| task.is_pending()) {
            log::debug!("Superseding pending evaluation of {:?}", previous.expression());
            previous.cancel();
        }
        self.task = Some(ScheduledTask::new(expression, now + self.quiet_period));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.as_mut() {
            task.cancel();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.task.as_ref().is_some_and(ScheduledTask::is_pending)
    }

    pub fn pending(&self) -> Option<&ScheduledTask> {
        self.task.as_ref().filter(|task| task.is_pending())
    }

    /// Take the pending expression if its quiet period has elapsed at `now`
    pub fn poll_due(&mut self, now: Instant) -> Option<String> {
        let fired = self.task.as_mut()?.fire(now);
        if fired.is_some() {
            self.task = None;
        }
        fired
    }

    /// How long until the pending task is due; `None` when nothing is pending
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending()
            .map(|task| task.due().saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
