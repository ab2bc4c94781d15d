//! Tests for the full-screen layout

use crate::app::App;
use crate::test_utils::test_helpers::{TEST_JSON, key, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;

fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_layout_shows_tree_and_query() {
    let mut app = test_app(TEST_JSON);
    let output = render_app(&mut app, 60, 16);

    assert!(output.contains(" Results "));
    assert!(output.contains(" Query "));
    assert!(output.contains("\"b\": ["));
    assert!(output.contains("Enter submit"));
}

#[test]
fn test_failed_expression_shows_banner_and_keeps_tree() {
    let mut app = test_app(TEST_JSON);
    app.submit_query("b");
    let before = render_app(&mut app, 60, 16);
    assert!(before.contains("│  3 "));

    app.submit_query("c.invalidSyntax((");
    let after = render_app(&mut app, 60, 16);

    assert!(after.contains("Invalid expression"));
    assert!(!after.contains("Enter submit"));
    assert!(after.contains("│  3 "));
    assert!(!after.contains("\"a\": 1"));
}

#[test]
fn test_query_title_counts_history() {
    let mut app = test_app(TEST_JSON);
    app.submit_query("a");
    app.submit_query("b");

    let output = render_app(&mut app, 60, 16);
    assert!(output.contains(" Query (2 in history) "));
}

#[test]
fn test_history_popup_is_drawn_over_results() {
    let mut app = test_app(TEST_JSON);
    app.submit_query("b");
    app.submit_query("");
    app.handle_key_event(key(KeyCode::Up));

    let output = render_app(&mut app, 60, 16);
    assert!(output.contains("History (1/1)"));
}
