//! Error taxonomy for the admission form and its collaborators
//!
//! Every error here is local and recoverable. The UI layer turns them into
//! notices; none of them ends the process.

use std::path::PathBuf;
use thiserror::Error;

/// First failing validation rule of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter name")]
    MissingName,
    #[error("Enter valid email")]
    InvalidEmail,
    #[error("Enter valid phone")]
    InvalidPhone,
    #[error("Select course")]
    MissingCourse,
}

/// Attachment store failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("no attachment at position {position} (store holds {len})")]
    OutOfRange { position: usize, len: usize },
}

/// Field addressing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field `{0}`")]
    InvalidField(String),
}

/// Tab name parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route `{0}`")]
    Unknown(String),
}

/// Permission gate refusals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PermissionError {
    #[error("Please grant photo permissions")]
    MediaAccessDenied,
}

/// Picker failures (distinct from a user cancelling a pick)
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not a regular file")]
    NotAFile(PathBuf),
    #[error("{0} is not an image")]
    NotAnImage(PathBuf),
}
