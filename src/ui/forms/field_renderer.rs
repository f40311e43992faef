//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text field, showing its placeholder while empty
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = field.as_text();
    let cursor = if is_active { "▌" } else { "" };

    let mut spans = Vec::with_capacity(2);
    if value.is_empty() {
        if is_active {
            spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            field.name.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(value, style));
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
