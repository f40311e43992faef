//! Values produced by a successful submit

use super::attachments::AttachmentRecord;
use crate::state::Route;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of an application at submit time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub course: String,
    pub attachments: Vec<AttachmentRecord>,
}

/// Result of a successful submit: the payload plus where to go next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub payload: SubmissionPayload,
    pub next_route: Route,
}

/// The most recent submission, kept by the UI for the Uploads screen
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub payload: SubmissionPayload,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(payload: SubmissionPayload) -> Self {
        Self {
            payload,
            submitted_at: Utc::now(),
        }
    }

    /// Local wall-clock time for display
    pub fn submitted_at_display(&self) -> String {
        self.submitted_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}
