//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod profile;
mod router;
mod tab_bar;
mod uploads;

pub use router::ScreenTable;

use crate::app::App;
use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, screens: &ScreenTable) {
    let layout = layout::create_layout(frame.area());

    let route = app.current_route();
    match screens.get(route) {
        Some(draw_screen) => draw_screen(frame, layout.content, app),
        None => {
            tracing::warn!(route = route.label(), "no screen registered");
            let placeholder = Paragraph::new(format!("Nothing to show for {}", route.label()))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, layout.content);
        }
    }

    tab_bar::draw_tab_bar(frame, layout.tab_bar, app);
    layout::draw_status_bar(frame, layout.status_bar, app);

    // Overlays
    if let Some(prompt) = &app.state.path_prompt {
        components::render_path_prompt(frame, prompt);
    }
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
