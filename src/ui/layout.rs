//! Layout components (content area, tab bar, status bar)

use crate::app::App;
use crate::state::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tab bar height: top border, labels, indicator
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Areas of the main screen
pub struct ScreenLayout {
    pub content: Rect,
    pub tab_bar: Rect,
    pub status_bar: Rect,
}

/// Split the frame into content, bottom tab bar and status line
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                 // Content
            Constraint::Length(TAB_BAR_HEIGHT), // Tab bar
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    ScreenLayout {
        content: chunks[0],
        tab_bar: chunks[1],
        status_bar: chunks[2],
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_route_hints(app.current_route())),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let attachments = app.state.form.attachments().len();
    if attachments > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("📎 {attachments}"),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current route
fn get_route_hints(route: Route) -> String {
    use crate::platform::{PICK_DOCUMENT_SHORTCUT, PICK_PHOTO_SHORTCUT, SUBMIT_SHORTCUT};

    match route {
        Route::Form => format!(
            "Tab:next  {SUBMIT_SHORTCUT}:submit  {PICK_DOCUMENT_SHORTCUT}:doc  {PICK_PHOTO_SHORTCUT}:photo  F1-F4:tabs"
        ),
        Route::Home | Route::Uploads | Route::Profile => {
            "h/l:tabs  1-4:jump  q:quit".to_string()
        }
    }
}
