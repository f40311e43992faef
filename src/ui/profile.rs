//! Profile screen

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the profile placeholder
pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let content = vec![
        Line::from(Span::styled(
            "Profile",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Simple profile placeholder.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
