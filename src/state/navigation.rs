//! Tab navigation state and the tab indicator animation

use crate::error::RouteError;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Top-level screens, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Form,
    Uploads,
    Profile,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Form, Route::Uploads, Route::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Form => "Form",
            Self::Uploads => "Uploads",
            Self::Profile => "Profile",
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| RouteError::Unknown(s.to_string()))
    }
}

/// Sliding indicator under the tab bar
#[derive(Debug, Clone)]
pub struct TabIndicator {
    /// Tab position the slide started from
    from: f32,
    /// Tab position the slide ends at
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl TabIndicator {
    pub fn new(index: usize, duration: Duration) -> Self {
        Self {
            from: index as f32,
            to: index as f32,
            started_at: Instant::now(),
            duration,
        }
    }

    /// Start sliding towards `index` from wherever the indicator is now
    pub fn slide_to(&mut self, index: usize) {
        let now = Instant::now();
        self.from = self.position_at(now.saturating_duration_since(self.started_at));
        self.to = index as f32;
        self.started_at = now;
    }

    /// Indicator position (in tab units) `elapsed` after the slide started
    pub fn position_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        // Cubic ease-out, same curve as the tab focus
        let eased = simple_easing::cubic_out(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn position(&self) -> f32 {
        self.position_at(self.started_at.elapsed())
    }

    pub fn is_animating(&self) -> bool {
        self.from != self.to && self.started_at.elapsed() < self.duration
    }
}

/// Which tab is focused and how the tab bar gets there
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    pub indicator: TabIndicator,
}

impl Navigator {
    /// Default slide duration of the tab indicator
    pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(250);

    pub fn new(start: Route, animation: Duration) -> Self {
        Self {
            current: start,
            indicator: TabIndicator::new(Self::index_of(start), animation),
        }
    }

    fn index_of(route: Route) -> usize {
        Route::ALL
            .iter()
            .position(|r| *r == route)
            .unwrap_or_default()
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn current_index(&self) -> usize {
        Self::index_of(self.current)
    }

    /// Switch to `route`; a no-op when it is already focused
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        tracing::debug!("navigate {:?} -> {:?}", self.current, route);
        self.current = route;
        self.indicator.slide_to(Self::index_of(route));
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(route) = Route::ALL.get(index) {
            self.navigate(*route);
        }
    }

    pub fn next(&mut self) {
        let index = (self.current_index() + 1) % Route::ALL.len();
        self.select_index(index);
    }

    pub fn prev(&mut self) {
        let count = Route::ALL.len();
        let index = (self.current_index() + count - 1) % count;
        self.select_index(index);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::default(), Self::DEFAULT_ANIMATION)
    }
}
