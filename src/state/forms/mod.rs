//! Form domain layer
//!
//! The admission form controller, its fields, the attachment store and the
//! rules that gate submission.

mod admission_form;
mod attachments;
mod field;
mod payload;
mod validation;

pub use admission_form::{AdmissionForm, Form};
pub use attachments::{AttachmentKind, AttachmentRecord};
pub use field::{FieldName, FormField};
pub use payload::{SubmissionPayload, SubmissionReceipt};

#[cfg(test)]
pub use attachments::AttachmentStore;
