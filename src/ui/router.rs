//! Route table mapping each tab to the function that draws it
//!
//! Built once in `main` and handed to the draw loop.

use super::{forms, home, profile, uploads};
use crate::app::App;
use crate::state::Route;
use ratatui::{layout::Rect, Frame};

/// Draws one screen into the content area
pub type DrawFn = fn(&mut Frame, Rect, &App);

#[derive(Clone, Copy)]
pub struct ScreenEntry {
    pub route: Route,
    pub draw: DrawFn,
}

/// Registered screens, in registration order
#[derive(Clone, Default)]
pub struct ScreenTable {
    entries: Vec<ScreenEntry>,
}

impl ScreenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `draw` for `route`, replacing any earlier registration
    pub fn register(mut self, route: Route, draw: DrawFn) -> Self {
        match self.entries.iter_mut().find(|e| e.route == route) {
            Some(entry) => entry.draw = draw,
            None => self.entries.push(ScreenEntry { route, draw }),
        }
        self
    }

    /// The four admission screens
    pub fn standard() -> Self {
        Self::new()
            .register(Route::Home, home::draw)
            .register(Route::Form, forms::draw_admission_form)
            .register(Route::Uploads, uploads::draw)
            .register(Route::Profile, profile::draw)
    }

    pub fn get(&self, route: Route) -> Option<DrawFn> {
        self.entries
            .iter()
            .find(|e| e.route == route)
            .map(|e| e.draw)
    }

    pub fn routes(&self) -> impl Iterator<Item = Route> + '_ {
        self.entries.iter().map(|e| e.route)
    }
}
