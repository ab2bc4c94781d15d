use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};
use tui_textarea::Input;

use super::state::{App, Focus, OutputMode};
use crate::history::history_events;
use crate::view::Renderer;

/// Longest wait for input when no evaluation is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// Wait for one event (or the pending evaluation's deadline) and update state
    pub fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self
            .session
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                _ => {}
            }
        }

        self.tick();
        Ok(())
    }

    /// Run a debounced evaluation whose quiet period has elapsed
    pub fn tick(&mut self) -> bool {
        if self.session.tick().is_some() {
            self.refresh_history_popup();
            return true;
        }
        false
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => self.handle_results_pane_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('q') if ctrl => {
                self.output_mode = Some(OutputMode::Query);
                self.should_quit = true;
                true
            }
            KeyCode::Char('o') if ctrl => {
                self.output_mode = Some(OutputMode::Results);
                self.should_quit = true;
                true
            }
            KeyCode::BackTab => {
                self.history_popup.close();
                self.focus = match self.focus {
                    Focus::InputField => Focus::ResultsPane,
                    Focus::ResultsPane => Focus::InputField,
                };
                true
            }
            _ => false,
        }
    }

    /// Keys when the query line is focused
    fn handle_input_field_key(&mut self, key: KeyEvent) {
        if self.history_popup.is_visible() && history_events::handle_history_popup_key(self, key) {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char('m') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => {
                let query = self.input.query();
                self.history_popup
                    .toggle(query, self.session.history().entries());
            }
            // Once open, Up moves the selection instead
            KeyCode::Up => {
                let query = self.input.query();
                self.history_popup
                    .open(query, self.session.history().entries());
            }
            KeyCode::Esc => {}
            _ => {
                if self.input.textarea.input(Input::from(key)) {
                    let raw = self.input.query().to_string();
                    self.session.on_keystroke(&raw);
                    self.refresh_history_popup();
                }
            }
        }
    }

    /// Keys when the results tree is focused
    fn handle_results_pane_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let tree = self.tree_mut();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => tree.cursor_down(1),
            KeyCode::Char('k') | KeyCode::Up => tree.cursor_up(1),
            KeyCode::Char('d') if ctrl => tree.page_down(),
            KeyCode::Char('u') if ctrl => tree.page_up(),
            KeyCode::PageDown => tree.page_down(),
            KeyCode::PageUp => tree.page_up(),
            KeyCode::Char('g') | KeyCode::Home => tree.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => tree.jump_to_bottom(),
            KeyCode::Char(' ') | KeyCode::Enter => tree.toggle_at_cursor(),
            KeyCode::Char('e') => tree.expand_all(),
            KeyCode::Char('c') => tree.collapse_all(),
            KeyCode::Char('i') | KeyCode::Char('/') => self.focus = Focus::InputField,
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
