//! Admission form screen

use super::attachment_list::attachment_items;
use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::{PICK_DOCUMENT_SHORTCUT, PICK_PHOTO_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

/// Draw the admission form
pub fn draw_admission_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Full name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Date of birth
            Constraint::Length(3), // Course
            Constraint::Min(3),    // Attachments
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Admission Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let active = form.active_text_field().map(|field| field.name);
    for (idx, name) in FieldName::ALL.iter().enumerate() {
        draw_field(frame, chunks[idx], form.field(*name), active == Some(*name));
    }

    draw_attachments(frame, chunks[5], app);

    let key = Style::default().fg(Color::Cyan);
    let help_spans = if form.is_attachments_row_active() {
        vec![
            Span::styled("j/k", key),
            Span::raw(": select  "),
            Span::styled("x", key),
            Span::raw(": remove  "),
            Span::styled("Tab", key),
            Span::raw(": next field  "),
            Span::styled(SUBMIT_SHORTCUT, key),
            Span::raw(": submit"),
        ]
    } else {
        vec![
            Span::styled("Tab", key),
            Span::raw(": next field  "),
            Span::styled(PICK_DOCUMENT_SHORTCUT, key),
            Span::raw(": pick document  "),
            Span::styled(PICK_PHOTO_SHORTCUT, key),
            Span::raw(": pick photo  "),
            Span::styled(SUBMIT_SHORTCUT, key),
            Span::raw(": submit"),
        ]
    };
    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}

/// Draw the documents & photo list
fn draw_attachments(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_active = form.is_attachments_row_active();
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" Documents & Photo ({}) ", form.attachments().len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if form.attachments().is_empty() {
        let hint = Paragraph::new(format!(
            "No files yet. {PICK_DOCUMENT_SHORTCUT}: document  {PICK_PHOTO_SHORTCUT}: photo"
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let highlighted = is_active.then_some(form.selected_attachment);
    let list = List::new(attachment_items(form.attachments().list(), highlighted)).block(block);
    // Scroll state tracks the selection even while the row is unfocused
    let mut list_state = ListState::default().with_selected(Some(form.selected_attachment));
    frame.render_stateful_widget(list, area, &mut list_state);
}
