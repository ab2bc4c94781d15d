use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use serde_json::Value;

use super::tree_state::{RowKind, TreeRow, TreeView, quote};

const KEY_COLOR: Color = Color::Cyan;
const STRING_COLOR: Color = Color::Green;
const NUMBER_COLOR: Color = Color::Yellow;
const BOOL_COLOR: Color = Color::Magenta;
const NULL_COLOR: Color = Color::DarkGray;
const PUNCT_COLOR: Color = Color::White;
const FOLD_COLOR: Color = Color::DarkGray;

/// Render the results tree into `area`
pub fn render_tree(tree: &mut TreeView, frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(Style::default().fg(border_color));

    tree.set_viewport_height(block.inner(area).height as usize);

    let cursor = tree.cursor();
    let indent = tree.indent() as usize;
    let lines: Vec<Line> = tree
        .visible_rows()
        .map(|(idx, row)| {
            let line = row_line(row, indent);
            if focused && idx == cursor {
                line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Styled line for one tree row
pub fn row_line(row: &TreeRow, indent: usize) -> Line<'static> {
    let punct = Style::default().fg(PUNCT_COLOR);
    let mut spans = vec![Span::raw(" ".repeat(row.depth * indent))];

    if let Some(key) = &row.key {
        spans.push(Span::styled(quote(key), Style::default().fg(KEY_COLOR)));
        spans.push(Span::styled(": ", punct));
    }

    match &row.kind {
        RowKind::Open(container) => {
            spans.push(Span::styled(container.open(), punct));
            return Line::from(spans);
        }
        RowKind::Close(container) => spans.push(Span::styled(container.close(), punct)),
        RowKind::Empty(container) => {
            spans.push(Span::styled(container.open(), punct));
            spans.push(Span::styled(container.close(), punct));
        }
        RowKind::Collapsed { container, len } => {
            spans.push(Span::styled(
                format!("{}…{}", container.open(), container.close()),
                Style::default().fg(FOLD_COLOR),
            ));
            if !row.last {
                spans.push(Span::styled(",", punct));
            }
            spans.push(Span::styled(
                format!(" {}", container.describe(*len)),
                Style::default()
                    .fg(FOLD_COLOR)
                    .add_modifier(Modifier::ITALIC),
            ));
            return Line::from(spans);
        }
        RowKind::Scalar(value) => spans.push(scalar_span(value)),
    }

    if !row.last {
        spans.push(Span::styled(",", punct));
    }
    Line::from(spans)
}

fn scalar_span(value: &Value) -> Span<'static> {
    let color = match value {
        Value::String(_) => STRING_COLOR,
        Value::Number(_) => NUMBER_COLOR,
        Value::Bool(_) => BOOL_COLOR,
        _ => NULL_COLOR,
    };
    Span::styled(value.to_string(), Style::default().fg(color))
}

#[cfg(test)]
#[path = "tree_render_tests.rs"]
mod tree_render_tests;
