//! Form field value objects

use crate::error::FieldError;
use std::str::FromStr;

/// The five text fields of an admission application, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    DateOfBirth,
    Course,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::DateOfBirth,
        FieldName::Course,
    ];

    /// Key used in payloads and by `set_field`
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DateOfBirth => "dateOfBirth",
            Self::Course => "course",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::DateOfBirth => "Date of birth",
            Self::Course => "Course",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "you@mail.com",
            Self::Phone => "Optional",
            Self::DateOfBirth => "YYYY-MM-DD",
            Self::Course => "e.g. BSc Computer Science",
        }
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "dateOfBirth" | "date_of_birth" | "dob" => Ok(Self::DateOfBirth),
            "course" => Ok(Self::Course),
            other => Err(FieldError::InvalidField(other.to_string())),
        }
    }
}

/// A single text field with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value, unchecked
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;

        #[test]
        fn test_parse_known_names() {
            assert_eq!("name".parse::<FieldName>(), Ok(FieldName::Name));
            assert_eq!("email".parse::<FieldName>(), Ok(FieldName::Email));
            assert_eq!("phone".parse::<FieldName>(), Ok(FieldName::Phone));
            assert_eq!("course".parse::<FieldName>(), Ok(FieldName::Course));
        }

        #[test]
        fn test_parse_date_of_birth_aliases() {
            for alias in ["dateOfBirth", "date_of_birth", "dob"] {
                assert_eq!(alias.parse::<FieldName>(), Ok(FieldName::DateOfBirth));
            }
        }

        #[test]
        fn test_parse_unknown_name_fails() {
            let err = "Name".parse::<FieldName>().unwrap_err();
            assert_eq!(err, FieldError::InvalidField("Name".to_string()));
        }

        #[test]
        fn test_key_round_trips_through_parse() {
            for field in FieldName::ALL {
                assert_eq!(field.key().parse::<FieldName>(), Ok(field));
            }
        }
    }

    mod form_field {
        use super::*;

        #[test]
        fn test_new_is_empty() {
            let field = FormField::new(FieldName::Email);
            assert_eq!(field.as_text(), "");
            assert_eq!(field.label(), "Email");
        }

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::new(FieldName::Name);
            field.push_char('a');
            field.push_char('b');
            field.pop_char();
            assert_eq!(field.as_text(), "a");
        }

        #[test]
        fn test_pop_on_empty_is_noop() {
            let mut field = FormField::new(FieldName::Name);
            field.pop_char();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_clear() {
            let mut field = FormField::new(FieldName::Phone);
            field.set_text("1234567");
            field.clear();
            assert_eq!(field.as_text(), "");
        }
    }
}
