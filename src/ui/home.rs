//! Home screen

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let content = vec![
        Line::from(Span::styled(
            "College Admission Portal",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Use the tabs below to fill the admission form and upload documents.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("F2", key),
            Span::raw(" or "),
            Span::styled("2", key),
            Span::raw(": open the admission form"),
        ]),
        Line::from(vec![
            Span::styled("F3", key),
            Span::raw(" or "),
            Span::styled("3", key),
            Span::raw(": review your last submission"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Home ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}
