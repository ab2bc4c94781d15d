use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::history::HistoryPopup;
use crate::input::InputState;
use crate::query::Evaluator;
use crate::session::Session;
use crate::tree::TreeView;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

/// What to print when exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Results, // Displayed JSON (Ctrl+O)
    Query,   // Query string only (Ctrl+Q)
}

/// Application state
pub struct App {
    pub session: Session<TreeView>,
    pub input: InputState,
    pub history_popup: HistoryPopup,
    pub focus: Focus,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App exploring `document`
    pub fn new(document: Value, evaluator: Box<dyn Evaluator>, config: &Config) -> Self {
        let quiet_period = Duration::from_millis(config.query.debounce_ms);
        let tree = TreeView::new(config.tree.indent);

        Self {
            session: Session::new(document, evaluator, tree, quiet_period),
            input: InputState::new(),
            history_popup: HistoryPopup::new(),
            focus: Focus::InputField,
            output_mode: None,
            should_quit: false,
        }
    }

    /// Show a one-off notice in the banner (cleared by the next evaluation)
    pub fn notify(&mut self, message: &str) {
        self.session.banner_mut().show(message);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Current raw query text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn tree(&self) -> &TreeView {
        self.session.renderer()
    }

    pub fn tree_mut(&mut self) -> &mut TreeView {
        self.session.renderer_mut()
    }

    /// Replace the query line and evaluate it immediately
    pub fn submit_query(&mut self, text: &str) {
        self.input.set_query(text);
        self.submit();
    }

    /// Evaluate the current query line immediately
    pub fn submit(&mut self) {
        let raw = self.input.query().to_string();
        self.session.on_submit(&raw);
        self.refresh_history_popup();
    }

    pub(super) fn refresh_history_popup(&mut self) {
        let query = self.input.query();
        self.history_popup
            .refresh(query, self.session.history().entries());
    }

    /// Text to print after the terminal is restored
    pub fn output_text(&self) -> Option<String> {
        match self.output_mode? {
            OutputMode::Query => Some(self.query().trim().to_string()),
            OutputMode::Results => self
                .session
                .displayed()
                .and_then(|value| serde_json::to_string_pretty(value).ok()),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
