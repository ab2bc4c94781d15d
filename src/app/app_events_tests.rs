//! Tests for key handling

use super::*;
use crate::test_utils::test_helpers::{TEST_JSON, key, key_with_mods, test_app, type_str};
use serde_json::json;

#[test]
fn test_typing_schedules_instead_of_evaluating() {
    let mut app = test_app(TEST_JSON);
    type_str(&mut app, "b");

    assert_eq!(app.query(), "b");
    assert!(app.session.has_pending());
    // Still showing the full document until the quiet period passes
    assert_eq!(app.session.displayed(), Some(app.session.document()));
}

#[test]
fn test_tick_applies_after_quiet_period() {
    let mut app = test_app(TEST_JSON);
    type_str(&mut app, "b");

    std::thread::sleep(app.session.quiet_period() + Duration::from_millis(10));
    assert!(app.tick());
    assert_eq!(app.session.displayed(), Some(&json!([1, 2, 3])));
    assert!(!app.tick());
}

#[test]
fn test_enter_submits_immediately() {
    let mut app = test_app(TEST_JSON);
    type_str(&mut app, "b");
    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.session.has_pending());
    assert_eq!(app.session.displayed(), Some(&json!([1, 2, 3])));
    assert_eq!(app.session.history().entries(), ["b"]);
    // Enter never reaches the single-line textarea
    assert_eq!(app.input.textarea.lines().len(), 1);
}

#[test]
fn test_backspace_to_empty_resets_view() {
    let mut app = test_app(TEST_JSON);
    type_str(&mut app, "b");
    app.handle_key_event(key(KeyCode::Enter));

    app.handle_key_event(key(KeyCode::Backspace));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.query(), "");
    assert_eq!(app.session.displayed(), Some(app.session.document()));
}

#[test]
fn test_cursor_keys_do_not_schedule() {
    let mut app = test_app(TEST_JSON);
    type_str(&mut app, "b");
    app.handle_key_event(key(KeyCode::Enter));

    app.handle_key_event(key(KeyCode::Left));
    assert!(!app.session.has_pending());
}

#[test]
fn test_ctrl_c_quits_without_output() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
    assert_eq!(app.output_mode(), None);
}

#[test]
fn test_ctrl_q_quits_with_query_output() {
    let mut app = test_app(TEST_JSON);
    type_str(&mut app, "b");
    app.handle_key_event(key_with_mods(KeyCode::Char('q'), KeyModifiers::CONTROL));

    assert!(app.should_quit());
    assert_eq!(app.output_mode(), Some(OutputMode::Query));
    assert_eq!(app.output_text(), Some("b".to_string()));
}

#[test]
fn test_ctrl_o_quits_with_results_output() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key_with_mods(KeyCode::Char('o'), KeyModifiers::CONTROL));

    assert_eq!(app.output_mode(), Some(OutputMode::Results));
}

#[test]
fn test_esc_in_input_does_not_quit() {
    let mut app = test_app(TEST_JSON);
    type_str(&mut app, "b");
    app.handle_key_event(key(KeyCode::Esc));

    assert!(!app.should_quit());
    assert_eq!(app.query(), "b");
}

#[test]
fn test_esc_in_results_pane_quits() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key(KeyCode::BackTab));
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_backtab_switches_focus() {
    let mut app = test_app(TEST_JSON);

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::ResultsPane);

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_results_pane_navigation_and_folding() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key(KeyCode::BackTab));

    // {, "a", "b": [ ...
    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.tree().cursor(), 2);

    app.handle_key_event(key(KeyCode::Char(' ')));
    assert!(!app.tree().is_expanded("/b"));
    assert_eq!(app.tree().rows().len(), 4);

    app.handle_key_event(key(KeyCode::Char('e')));
    assert!(app.tree().is_expanded("/b"));

    app.handle_key_event(key(KeyCode::Char('c')));
    assert!(!app.tree().is_expanded("/b"));

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.tree().cursor(), 3);
    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.tree().cursor(), 0);
}

#[test]
fn test_results_pane_does_not_edit_query() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key(KeyCode::BackTab));
    app.handle_key_event(key(KeyCode::Char('x')));

    assert_eq!(app.query(), "");
    assert!(!app.session.has_pending());
}

#[test]
fn test_slash_returns_to_input() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key(KeyCode::BackTab));
    app.handle_key_event(key(KeyCode::Char('/')));

    assert_eq!(app.focus, Focus::InputField);
    assert_eq!(app.query(), "");
}

#[test]
fn test_q_in_results_pane_quits() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key(KeyCode::BackTab));
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}
