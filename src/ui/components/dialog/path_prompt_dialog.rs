//! File path prompt used by the document and photo pickers

use super::base::centered_rect;
use crate::state::PathPrompt;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PROMPT_WIDTH: u16 = 64;
const PROMPT_HEIGHT: u16 = 7;

/// Render the path prompt overlay
pub fn render_path_prompt(frame: &mut Frame, prompt: &PathPrompt) {
    let dialog_area = centered_rect(frame.area(), PROMPT_WIDTH, PROMPT_HEIGHT);
    frame.render_widget(Clear, dialog_area);

    // Keep the tail of long paths visible
    let visible = PROMPT_WIDTH.saturating_sub(6) as usize;
    let char_count = prompt.input.chars().count();
    let shown: String = if char_count > visible {
        prompt.input.chars().skip(char_count - visible).collect()
    } else {
        prompt.input.clone()
    };

    let content = vec![
        Line::from(Span::styled(
            "Path to file:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(shown, Style::default().fg(Color::White)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(": attach  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::styled(": cancel", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let dialog = Paragraph::new(content).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", prompt.title()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(dialog, dialog_area);
}
