//! Submission sink that writes each payload to the log

use super::traits::SubmissionSink;
use crate::state::SubmissionPayload;

/// Logs every submitted payload as one JSON line
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    fn render(payload: &SubmissionPayload) -> serde_json::Result<String> {
        serde_json::to_string(payload)
    }
}

impl SubmissionSink for TracingSink {
    fn deliver(&self, payload: &SubmissionPayload) {
        match Self::render(payload) {
            Ok(json) => tracing::info!(
                attachments = payload.attachments.len(),
                "application submitted: {json}"
            ),
            Err(e) => tracing::warn!("application submitted but could not be serialized: {e}"),
        }
    }
}
