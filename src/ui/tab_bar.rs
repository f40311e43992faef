//! Bottom tab bar with a sliding indicator

use crate::app::App;
use crate::state::Route;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Horizontal offset and width of the indicator for a fractional tab position
fn indicator_span(width: u16, tabs: usize, position: f32) -> (u16, u16) {
    if tabs == 0 || width == 0 {
        return (0, 0);
    }
    let tab_width = width as f32 / tabs as f32;
    let max_position = (tabs - 1) as f32;
    let x = (position.clamp(0.0, max_position) * tab_width).round() as u16;
    let w = (tab_width.round() as u16).max(1).min(width.saturating_sub(x));
    (x, w)
}

/// Draw the tab bar
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let tabs = Route::ALL.len();
    let tab_width = inner.width / tabs as u16;
    let current = app.current_route();

    for (idx, route) in Route::ALL.iter().enumerate() {
        let focused = *route == current;
        let style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        // Focused tab reads a little larger
        let label = if focused {
            format!("[ {} ]", route.label())
        } else {
            route.label().to_string()
        };

        let x = inner.x + tab_width * idx as u16;
        let width = if idx == tabs - 1 {
            inner.width - tab_width * idx as u16
        } else {
            tab_width
        };
        let label_area = Rect {
            x,
            y: inner.y,
            width,
            height: 1,
        };
        let paragraph =
            Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center);
        frame.render_widget(paragraph, label_area);
    }

    if inner.height < 2 {
        return;
    }

    let (offset, width) = indicator_span(inner.width, tabs, app.state.navigator.indicator.position());
    let indicator_area = Rect {
        x: inner.x + offset,
        y: inner.y + 1,
        width,
        height: 1,
    };
    let bar = Paragraph::new("━".repeat(width as usize)).style(Style::default().fg(Color::Cyan));
    frame.render_widget(bar, indicator_area);
}
