//! Trait abstractions for the device collaborators to enable mocking in tests

use crate::error::PickerError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;

/// How a pick ended. Cancelling is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome<T> {
    Picked(T),
    Cancelled,
}

/// What the user asked the picker for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    /// Path as typed into the prompt; blank means cancel
    pub raw_path: String,
}

impl PickRequest {
    pub fn new(raw_path: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedDocument {
    pub name: String,
    pub locator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub locator: String,
}

/// Yields a user-chosen file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentPicker: Send + Sync {
    async fn pick_document(
        &self,
        request: PickRequest,
    ) -> Result<PickOutcome<PickedDocument>, PickerError>;
}

/// Yields a user-chosen image
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick_image(&self, request: PickRequest) -> Result<PickOutcome<PickedImage>, PickerError>;
}

/// Asked before every image pick
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Returns true when media access is granted
    async fn request_media_access(&self) -> bool;
}

/// Receives each successful submission. Fire-and-forget: there is no ack.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink: Send + Sync {
    fn deliver(&self, payload: &SubmissionPayload);
}
