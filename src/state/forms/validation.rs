//! Validation rules for admission applications
//!
//! Rules run in a fixed order and the first failure is the one reported.

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: no `@` or whitespace in any part
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL pattern"));

/// 7 to 15 ASCII digits
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").expect("PHONE pattern"));

/// Field values as read by the validator
#[derive(Debug, Clone, Copy)]
pub struct FieldValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub course: &'a str,
}

/// Check `values` against every rule, stopping at the first failure.
///
/// Date of birth is accepted as free text and never checked.
pub fn validate(values: FieldValues<'_>) -> Result<(), ValidationError> {
    if values.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if !is_valid_email(values.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !values.phone.is_empty() && !is_valid_phone(values.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if values.course.trim().is_empty() {
        return Err(ValidationError::MissingCourse);
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}
