//! Uploads screen: what went out with the last submission

use super::forms::attachment_items;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, Paragraph, Wrap},
    Frame,
};

/// Draw the uploads screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Uploads ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Heading
            Constraint::Min(0),    // Attachments
            Constraint::Length(2), // Footer
        ])
        .margin(1)
        .split(inner);

    let mut heading = vec![
        Line::from(Span::styled(
            "Uploaded files (demo)",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match &app.state.last_submission {
        Some(receipt) => {
            heading.push(Line::from(vec![
                Span::raw("Submitted "),
                Span::styled(receipt.submitted_at_display(), Style::default().fg(Color::Cyan)),
                Span::raw(" by "),
                Span::styled(&receipt.payload.name, Style::default().fg(Color::White)),
                Span::raw(" for "),
                Span::styled(&receipt.payload.course, Style::default().fg(Color::White)),
            ]));

            let items = attachment_items(&receipt.payload.attachments, None);
            if items.is_empty() {
                let empty = Paragraph::new("No files were attached.")
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(empty, chunks[1]);
            } else {
                let list = List::new(items).block(
                    Block::default()
                        .title(format!(" Files ({}) ", receipt.payload.attachments.len()))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
                frame.render_widget(list, chunks[1]);
            }
        }
        None => {
            heading.push(Line::from(Span::styled(
                "Files you picked will show here after submit (for demo this is local state only).",
                Style::default().fg(Color::Gray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(heading).wrap(Wrap { trim: false }), chunks[0]);

    let footer = Paragraph::new(
        "This screen can be integrated with your backend (multipart/form-data).",
    )
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: false });
    frame.render_widget(footer, chunks[2]);
}
