//! Attachment list rendering

use crate::state::{AttachmentKind, AttachmentRecord};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One list row per attachment; `selected` highlights a row
pub fn attachment_items(records: &[AttachmentRecord], selected: Option<usize>) -> Vec<ListItem<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let is_selected = selected == Some(idx);
            let prefix = if is_selected { "▸ " } else { "  " };
            let row_style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            let kind_color = match record.kind() {
                AttachmentKind::Document => Color::Yellow,
                AttachmentKind::Image => Color::Magenta,
            };

            let line = Line::from(vec![
                Span::styled(prefix, row_style),
                Span::styled(
                    format!("[{}] ", record.kind().label()),
                    Style::default().fg(kind_color),
                ),
                Span::styled(record.name(), row_style),
                Span::raw("  "),
                Span::styled(record.source_locator(), Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(line).style(row_style)
        })
        .collect()
}
