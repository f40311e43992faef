//! Admission form controller
//!
//! Owns the five text fields and the attachment store. Writes are never
//! checked; `validate` and `submit` are where rules apply.

use super::attachments::{AttachmentKind, AttachmentRecord, AttachmentStore};
use super::field::{FieldName, FormField};
use super::payload::{Submission, SubmissionPayload};
use super::validation::{self, FieldValues};
use crate::device::SubmissionSink;
use crate::error::{AttachmentError, FieldError, ValidationError};
use crate::state::Route;

/// Trait for common form focus handling
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Index of the attachment row in the focus order (after the five fields)
const ATTACHMENTS_ROW: usize = FieldName::ALL.len();

#[derive(Debug, Clone)]
pub struct AdmissionForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub date_of_birth: FormField,
    pub course: FormField,
    attachments: AttachmentStore,
    pub active_field_index: usize,
    /// Highlighted attachment when the attachment row has focus
    pub selected_attachment: usize,
}

impl AdmissionForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldName::Name),
            email: FormField::new(FieldName::Email),
            phone: FormField::new(FieldName::Phone),
            date_of_birth: FormField::new(FieldName::DateOfBirth),
            course: FormField::new(FieldName::Course),
            attachments: AttachmentStore::new(),
            active_field_index: 0,
            selected_attachment: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::Course => &self.course,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::DateOfBirth => &mut self.date_of_birth,
            FieldName::Course => &mut self.course,
        }
    }

    /// Write one field, unchecked
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        tracing::debug!(field = name.key(), "field set");
        self.field_mut(name).set_text(value);
    }

    /// Write one field addressed by its key (`name`, `email`, `dateOfBirth`, ...)
    pub fn set_field(&mut self, field_name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let name: FieldName = field_name.parse()?;
        self.set(name, value);
        Ok(())
    }

    pub fn attachments(&self) -> &AttachmentStore {
        &self.attachments
    }

    pub fn add_attachment(
        &mut self,
        kind: AttachmentKind,
        name: impl Into<String>,
        source_locator: impl Into<String>,
    ) -> uuid::Uuid {
        self.attachments.add(kind, name, source_locator)
    }

    /// Remove the record at `position`; out of range leaves the list unchanged
    pub fn remove_attachment(&mut self, position: usize) -> Result<AttachmentRecord, AttachmentError> {
        let removed = self.attachments.remove_at(position)?;
        self.clamp_selected_attachment();
        Ok(removed)
    }

    /// Remove whichever attachment is highlighted
    pub fn remove_selected_attachment(&mut self) -> Result<AttachmentRecord, AttachmentError> {
        self.remove_attachment(self.selected_attachment)
    }

    pub fn select_next_attachment(&mut self) {
        if self.selected_attachment + 1 < self.attachments.len() {
            self.selected_attachment += 1;
        }
    }

    pub fn select_prev_attachment(&mut self) {
        self.selected_attachment = self.selected_attachment.saturating_sub(1);
    }

    fn clamp_selected_attachment(&mut self) {
        let last = self.attachments.len().saturating_sub(1);
        self.selected_attachment = self.selected_attachment.min(last);
    }

    /// Check the current values; the first failing rule wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(FieldValues {
            name: self.name.as_text(),
            email: self.email.as_text(),
            phone: self.phone.as_text(),
            course: self.course.as_text(),
        })
    }

    /// Validate, hand the payload to `sink`, then reset to an empty form.
    ///
    /// A failed validation leaves every field and attachment untouched.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<Submission, ValidationError> {
        if let Err(reason) = self.validate() {
            tracing::info!("submit rejected: {reason}");
            return Err(reason);
        }

        let payload = self.snapshot();
        sink.deliver(&payload);
        self.reset();

        Ok(Submission {
            payload,
            next_route: Route::Uploads,
        })
    }

    fn snapshot(&self) -> SubmissionPayload {
        SubmissionPayload {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            date_of_birth: self.date_of_birth.as_text().to_string(),
            course: self.course.as_text().to_string(),
            attachments: self.attachments.list().to_vec(),
        }
    }

    fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.attachments.clear();
        self.active_field_index = 0;
        self.selected_attachment = 0;
    }

    /// Returns true if the attachment row currently has focus
    pub fn is_attachments_row_active(&self) -> bool {
        self.active_field_index == ATTACHMENTS_ROW
    }

    /// The focused text field, if a text field has focus
    pub fn active_text_field(&self) -> Option<&FormField> {
        FieldName::ALL
            .get(self.active_field_index)
            .map(|name| self.field(*name))
    }

    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        let name = FieldName::ALL.get(self.active_field_index).copied()?;
        Some(self.field_mut(name))
    }
}

impl Default for AdmissionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for AdmissionForm {
    fn field_count(&self) -> usize {
        ATTACHMENTS_ROW + 1 // five text fields, attachment row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(ATTACHMENTS_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MockSubmissionSink;

    fn filled_form() -> AdmissionForm {
        let mut form = AdmissionForm::new();
        form.set_field("name", "Jane Doe").unwrap();
        form.set_field("email", "jane@x.com").unwrap();
        form.set_field("course", "BSc CS").unwrap();
        form
    }

    fn sink_expecting(times: usize) -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_deliver().times(times).return_const(());
        sink
    }

    mod fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_empty() {
            let form = AdmissionForm::new();
            for name in FieldName::ALL {
                assert_eq!(form.field(name).as_text(), "");
            }
            assert!(form.attachments().is_empty());
        }

        #[test]
        fn test_set_field_writes_unchecked() {
            let mut form = AdmissionForm::new();
            form.set_field("email", "not an email").unwrap();
            form.set_field("dateOfBirth", "someday").unwrap();
            assert_eq!(form.email.as_text(), "not an email");
            assert_eq!(form.date_of_birth.as_text(), "someday");
        }

        #[test]
        fn test_set_field_unknown_name_fails() {
            let mut form = AdmissionForm::new();
            let err = form.set_field("age", "21").unwrap_err();
            assert_eq!(err, FieldError::InvalidField("age".to_string()));
        }

        #[test]
        fn test_set_field_touches_only_one_field() {
            let mut form = filled_form();
            form.set_field("phone", "5551234").unwrap();
            assert_eq!(form.name.as_text(), "Jane Doe");
            assert_eq!(form.email.as_text(), "jane@x.com");
            assert_eq!(form.phone.as_text(), "5551234");
            assert_eq!(form.course.as_text(), "BSc CS");
        }
    }

    mod validate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_missing_name() {
            assert_eq!(AdmissionForm::new().validate(), Err(ValidationError::MissingName));
        }

        #[test]
        fn test_filled_form_is_valid() {
            assert_eq!(filled_form().validate(), Ok(()));
        }

        #[test]
        fn test_validate_is_idempotent() {
            let mut form = filled_form();
            form.set(FieldName::Phone, "12ab");
            let first = form.validate();
            assert_eq!(first, Err(ValidationError::InvalidPhone));
            assert_eq!(form.validate(), first);
            assert_eq!(form.validate(), first);
        }

        #[test]
        fn test_date_of_birth_is_never_checked() {
            let mut form = filled_form();
            form.set(FieldName::DateOfBirth, "not a date !!");
            assert_eq!(form.validate(), Ok(()));
        }
    }

    mod attachments {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_clamps_selection() {
            let mut form = AdmissionForm::new();
            form.add_attachment(AttachmentKind::Document, "a.pdf", "L1");
            form.add_attachment(AttachmentKind::Document, "b.pdf", "L2");
            form.select_next_attachment();
            assert_eq!(form.selected_attachment, 1);

            let removed = form.remove_selected_attachment().unwrap();

            assert_eq!(removed.name(), "b.pdf");
            assert_eq!(form.selected_attachment, 0);
        }

        #[test]
        fn test_selection_stays_in_bounds() {
            let mut form = AdmissionForm::new();
            form.add_attachment(AttachmentKind::Image, "photo", "L1");
            form.select_next_attachment();
            form.select_next_attachment();
            assert_eq!(form.selected_attachment, 0);
            form.select_prev_attachment();
            assert_eq!(form.selected_attachment, 0);
        }

        #[test]
        fn test_remove_selected_on_empty_fails() {
            let mut form = AdmissionForm::new();
            assert!(matches!(
                form.remove_selected_attachment(),
                Err(AttachmentError::OutOfRange { .. })
            ));
        }

        #[test]
        fn test_remove_attachment_by_position() {
            let mut form = AdmissionForm::new();
            form.add_attachment(AttachmentKind::Document, "a.pdf", "L1");
            form.add_attachment(AttachmentKind::Image, "photo", "L2");
            form.add_attachment(AttachmentKind::Document, "c.pdf", "L3");

            let removed = form.remove_attachment(1).unwrap();

            assert_eq!(removed.source_locator(), "L2");
            let names: Vec<&str> = form.attachments().list().iter().map(|r| r.name()).collect();
            assert_eq!(names, vec!["a.pdf", "c.pdf"]);
        }

        #[test]
        fn test_remove_attachment_out_of_range_is_noop() {
            let mut form = AdmissionForm::new();
            form.add_attachment(AttachmentKind::Document, "a.pdf", "L1");
            let before = form.attachments().clone();

            let err = form.remove_attachment(1).unwrap_err();

            assert_eq!(err, AttachmentError::OutOfRange { position: 1, len: 1 });
            assert_eq!(form.attachments(), &before);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_end_to_end_submit_resets_form() {
            let mut form = filled_form();
            form.add_attachment(AttachmentKind::Image, "photo", "uri://1");
            let sink = sink_expecting(1);

            let submission = form.submit(&sink).unwrap();

            let payload = &submission.payload;
            assert_eq!(payload.name, "Jane Doe");
            assert_eq!(payload.email, "jane@x.com");
            assert_eq!(payload.phone, "");
            assert_eq!(payload.date_of_birth, "");
            assert_eq!(payload.course, "BSc CS");
            assert_eq!(payload.attachments.len(), 1);
            assert_eq!(payload.attachments[0].kind(), AttachmentKind::Image);
            assert_eq!(payload.attachments[0].name(), "photo");
            assert_eq!(payload.attachments[0].source_locator(), "uri://1");
            assert_eq!(submission.next_route, Route::Uploads);

            assert_eq!(form.validate(), Err(ValidationError::MissingName));
            assert!(form.attachments().list().is_empty());
        }

        #[test]
        fn test_sink_receives_the_returned_payload() {
            let mut form = filled_form();
            form.set(FieldName::Phone, "5551234567");
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver()
                .withf(|p| p.name == "Jane Doe" && p.phone == "5551234567")
                .times(1)
                .return_const(());

            let submission = form.submit(&sink).unwrap();
            assert_eq!(submission.payload.phone, "5551234567");
        }

        #[test]
        fn test_failed_submit_leaves_state_untouched() {
            let mut form = filled_form();
            form.set(FieldName::Email, "jane");
            form.add_attachment(AttachmentKind::Document, "a.pdf", "L1");
            form.active_field_index = 2;
            let before = form.clone();
            let sink = sink_expecting(0);

            let err = form.submit(&sink).unwrap_err();

            assert_eq!(err, ValidationError::InvalidEmail);
            for name in FieldName::ALL {
                assert_eq!(form.field(name), before.field(name));
            }
            assert_eq!(form.attachments(), before.attachments());
            assert_eq!(form.active_field_index, 2);
        }

        #[test]
        fn test_form_is_reusable_after_submit() {
            let mut form = filled_form();
            let sink = sink_expecting(2);
            form.submit(&sink).unwrap();

            form.set_field("name", "John Roe").unwrap();
            form.set_field("email", "john@y.org").unwrap();
            form.set_field("course", "BA History").unwrap();
            let second = form.submit(&sink).unwrap();

            assert_eq!(second.payload.name, "John Roe");
            assert!(second.payload.attachments.is_empty());
        }

        #[test]
        fn test_reset_restores_focus() {
            let mut form = filled_form();
            form.active_field_index = 4;
            form.submit(&sink_expecting(1)).unwrap();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_attachment, 0);
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_attachment_row() {
            assert_eq!(AdmissionForm::new().field_count(), 6);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = AdmissionForm::new();
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_attachment_row() {
            let mut form = AdmissionForm::new();
            form.prev_field();
            assert!(form.is_attachments_row_active());
            assert!(form.active_text_field().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = AdmissionForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_active_text_field_follows_focus() {
            let mut form = AdmissionForm::new();
            form.set_active_field(3);
            assert_eq!(form.active_text_field().unwrap().name, FieldName::DateOfBirth);
            form.active_text_field_mut().unwrap().push_char('2');
            assert_eq!(form.date_of_birth.as_text(), "2");
        }
    }
}
