use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::history::history_render;
use crate::tree::tree_render;

const KEY_HINTS: &str = "Enter submit · Ctrl+R history · Shift+Tab tree · Ctrl+Q/Ctrl+O print & quit · Ctrl+C quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Results tree, one banner line, query input
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

        let results_area = layout[0];
        let banner_area = layout[1];
        let input_area = layout[2];

        let results_focused = self.focus == Focus::ResultsPane;
        tree_render::render_tree(self.tree_mut(), frame, results_area, results_focused);

        self.render_banner(frame, banner_area);
        self.render_input_field(frame, input_area);

        history_render::render_popup(self, frame, input_area);
    }

    /// Error banner, or key hints when there is nothing to report
    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let banner = self.session.banner();

        let line = if banner.is_empty() {
            Line::styled(
                format!(" {}", KEY_HINTS),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            Line::styled(
                format!(" {}", banner.text()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        };

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::InputField {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let history_len = self.session.history().len();
        let title = if history_len == 0 {
            " Query ".to_string()
        } else {
            format!(" Query ({} in history) ", history_len)
        };

        self.input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input.textarea, area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
