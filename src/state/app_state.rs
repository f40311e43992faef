//! Application state definitions

use super::forms::{AdmissionForm, AttachmentKind, SubmissionReceipt};
use super::navigation::Navigator;
use std::collections::VecDeque;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Modal message shown until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Path entry for a pending document or photo pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub kind: AttachmentKind,
    pub input: String,
}

impl PathPrompt {
    pub fn new(kind: AttachmentKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            AttachmentKind::Document => "Pick document",
            AttachmentKind::Image => "Pick photo",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub navigator: Navigator,

    // Form
    pub form: AdmissionForm,
    pub path_prompt: Option<PathPrompt>,

    // Feedback
    notices: VecDeque<Notice>,
    pub status_message: Option<String>,

    /// Most recent successful submission, shown on the Uploads screen
    pub last_submission: Option<SubmissionReceipt>,
}

impl AppState {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            ..Default::default()
        }
    }

    /// Queue a notice for display
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push_notice(Notice::new(NoticeLevel::Error, "Error", message));
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Notice currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn is_prompting(&self) -> bool {
        self.path_prompt.is_some()
    }
}
