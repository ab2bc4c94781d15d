use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::history::MAX_VISIBLE_SUGGESTIONS;
use crate::widgets::popup;

const BORDER: Color = Color::Cyan;
const BACKGROUND: Color = Color::Black;
const ITEM_SELECTED_BG: Color = Color::DarkGray;
const ITEM_SELECTED_BAR: Color = Color::Cyan;
const NO_MATCHES: Color = Color::DarkGray;

/// Render the history suggestion popup above the query line
///
/// Returns the popup area, or None when the popup is hidden.
pub fn render_popup(app: &App, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    if !app.history_popup.is_visible() {
        return None;
    }

    let entries = app.session.history().entries();
    let visible_count = app.history_popup.filtered_count().min(MAX_VISIBLE_SUGGESTIONS);
    let height = (visible_count as u16).max(1) + 2; // +2 for borders

    let popup_area = popup::popup_above_anchor(input_area, input_area.width, height, 0);
    popup::clear_area(frame, popup_area);

    let title = format!(
        " History ({}/{}) ",
        app.history_popup.filtered_count(),
        entries.len()
    );

    let max_text_width = (popup_area.width as usize).saturating_sub(6);

    let items: Vec<ListItem> = if app.history_popup.filtered_count() == 0 {
        vec![ListItem::new(Line::from(Span::styled(
            "   No matches",
            Style::default().fg(NO_MATCHES),
        )))]
    } else {
        app.history_popup
            .visible_entries(entries)
            .map(|(display_idx, entry)| {
                let text = truncate_to_width(entry, max_text_width);
                if display_idx == app.history_popup.selected_index() {
                    let bg = Style::default().bg(ITEM_SELECTED_BG);
                    ListItem::new(Line::from(vec![
                        Span::styled(" ┃ ", bg.fg(ITEM_SELECTED_BAR)),
                        Span::styled(text, bg.add_modifier(Modifier::BOLD)),
                    ]))
                    .style(bg)
                } else {
                    ListItem::new(Line::from(vec![Span::raw("   "), Span::raw(text)]))
                }
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(BORDER))
        .style(Style::default().bg(BACKGROUND));

    frame.render_widget(List::new(items).block(block), popup_area);

    Some(popup_area)
}

/// Cut `text` to at most `max_width` display columns, marking the cut with an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "history_render_tests.rs"]
mod history_render_tests;
