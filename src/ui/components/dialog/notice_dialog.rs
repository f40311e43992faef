//! Alert-style notice dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notice, NoticeLevel};
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

/// Render the front notice as a modal
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let color = level_color(notice.level);
    let hint = vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &notice.title,
            title_color: color,
            border_color: color,
            message: &notice.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
