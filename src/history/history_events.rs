use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Keys while the suggestion popup is open
///
/// Returns false for keys the popup does not use, so they keep editing the query line.
pub fn handle_history_popup_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => {
            app.history_popup.select_previous();
            true
        }
        KeyCode::Down => {
            app.history_popup.select_next();
            true
        }
        KeyCode::Enter | KeyCode::Tab => {
            let selected = app
                .history_popup
                .selected_entry(app.session.history().entries())
                .map(str::to_string);
            app.history_popup.close();
            match selected {
                Some(entry) => app.submit_query(&entry),
                // Nothing to accept: Enter still submits what is typed
                None if key.code == KeyCode::Enter => app.submit(),
                None => {}
            }
            true
        }
        KeyCode::Esc => {
            app.history_popup.close();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "history_events_tests.rs"]
mod history_events_tests;
