//! Class-name validation
//!
//! Validation failures are ordinary values, not errors: the hosting dialog
//! shows them inline next to the offending control and keeps the panel
//! open. At most one failure is reported per check, pointing at the field
//! the user should fix first.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The input control a validation failure points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OptionsField {
    ClassName,
}

/// What went wrong with the proposed class name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    EmptyName,
    InvalidIdentifier,
}

/// A single validation failure with the field to focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationFailure {
    pub kind: ValidationErrorKind,
    pub message: String,
    pub field: OptionsField,
}

impl ValidationFailure {
    fn class_name(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: OptionsField::ClassName,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate a proposed class name.
///
/// The raw text is trimmed first; an all-whitespace entry fails the same
/// way an empty one does. Identifier syntax comes from the injected
/// `checker`, typically [`is_java_identifier`](crate::identifier::is_java_identifier)
/// or whatever rule the host's language model provides. Pure and
/// idempotent: repeated calls on the same input yield the same result.
pub fn validate_class_name(
    raw_class_name: &str,
    checker: impl Fn(&str) -> bool,
) -> Option<ValidationFailure> {
    let class_name = raw_class_name.trim();

    if class_name.is_empty() {
        return Some(ValidationFailure::class_name(
            ValidationErrorKind::EmptyName,
            "Class name is empty",
        ));
    }

    if !checker(class_name) {
        return Some(ValidationFailure::class_name(
            ValidationErrorKind::InvalidIdentifier,
            "Class name is not a valid identifier",
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::is_java_identifier;

    #[test]
    fn test_empty_and_blank_fail_as_empty() {
        for raw in ["", "   ", "\t\n"] {
            let failure = validate_class_name(raw, is_java_identifier).unwrap();
            assert_eq!(failure.kind, ValidationErrorKind::EmptyName);
            assert_eq!(failure.field, OptionsField::ClassName);
        }
    }

    #[test]
    fn test_bad_identifier_fails() {
        let failure = validate_class_name("123Bad", is_java_identifier).unwrap();
        assert_eq!(failure.kind, ValidationErrorKind::InvalidIdentifier);
        assert_eq!(failure.field, OptionsField::ClassName);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed_before_checking() {
        assert_eq!(validate_class_name("  Valid  ", is_java_identifier), None);
        // The checker sees the trimmed text, not the raw entry
        let seen = std::cell::RefCell::new(String::new());
        let _ = validate_class_name("  Valid  ", |s| {
            *seen.borrow_mut() = s.to_string();
            true
        });
        assert_eq!(*seen.borrow(), "Valid");
    }

    #[test]
    fn test_checker_is_injected() {
        // A permissive checker accepts what the Java rule would not
        assert_eq!(validate_class_name("123Bad", |_| true), None);
        // A rejecting checker fails what the Java rule would accept
        let failure = validate_class_name("Fine", |_| false).unwrap();
        assert_eq!(failure.kind, ValidationErrorKind::InvalidIdentifier);
    }
}
