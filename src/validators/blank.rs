//! Blankness validator
//!
//! A string is blank when it is absent or trims to nothing. The one check
//! here asserts NON-blankness and is named accordingly; its key stays
//! `validation.blank` because the key names the failure, not the check.

use std::borrow::Cow;

use crate::core::{ErrorKind, ValidationError, Validator};

// ============================================================================
// NOT BLANK
// ============================================================================

/// Checks that a string is present and not whitespace-only.
///
/// Accepts anything convertible to `Option<&str>`, so both `"x"` and
/// `value.as_deref()` read naturally at the call site. An absent string
/// counts as blank.
///
/// # Examples
///
/// ```
/// use checktree::prelude::*;
///
/// assert!(NotBlank::new("alice", "username").is_valid());
/// assert!(NotBlank::new("   ", "username").is_invalid());
/// assert!(NotBlank::new(None, "username").is_invalid());
/// ```
#[derive(Debug, Clone)]
pub struct NotBlank {
    blank: bool,
    label: Cow<'static, str>,
    kind: ErrorKind,
}

impl NotBlank {
    /// Creates a non-blankness check.
    #[must_use]
    pub fn new<'a>(
        value: impl Into<Option<&'a str>>,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            blank: value.into().is_none_or(|s| s.trim().is_empty()),
            label: label.into(),
            kind: ErrorKind::Blank,
        }
    }

    /// Overrides the default error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Validator for NotBlank {
    fn is_valid(&self) -> bool {
        !self.blank
    }

    fn build_error(&self) -> ValidationError {
        ValidationError::new(
            self.label.clone(),
            self.kind.clone(),
            format!("{} cannot be blank", self.label),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_not_blank() {
        assert!(NotBlank::new("alice", "username").is_valid());
        assert!(NotBlank::new("  a  ", "username").is_valid());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        assert!(NotBlank::new("", "username").is_invalid());
        assert!(NotBlank::new("   ", "username").is_invalid());
        assert!(NotBlank::new("\t\n", "username").is_invalid());
    }

    #[test]
    fn test_absent_is_blank() {
        assert!(NotBlank::new(None, "username").is_invalid());
    }

    #[test]
    fn test_error_shape() {
        let error = NotBlank::new("  ", "username").build_error();
        assert_eq!(error.label(), "username");
        assert_eq!(error.kind(), &ErrorKind::Blank);
        assert_eq!(error.message(), "username cannot be blank");
    }
}
