use std::collections::HashSet;

/// Session-scoped record of accepted expressions
///
/// Entries are kept most-recent-first. An expression is recorded at most once;
/// accepting it again later leaves its original position alone.
#[derive(Debug, Clone, Default)]
pub struct HistoryTracker {
    order: Vec<String>,
    members: HashSet<String>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully applied expression
    ///
    /// Returns true if the expression was new.
    pub fn record(&mut self, expression: &str) -> bool {
        if expression.is_empty() || self.members.contains(expression) {
            return false;
        }

        self.members.insert(expression.to_string());
        self.order.insert(0, expression.to_string());
        log::debug!("History: recorded {:?} ({} entries)", expression, self.order.len());
        true
    }

    /// Most-recent-first entries
    pub fn entries(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, expression: &str) -> bool {
        self.members.contains(expression)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tracker_tests;
