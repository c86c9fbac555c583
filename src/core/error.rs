//! The record of a single failed check
//!
//! A [`ValidationError`] is the immutable triple a rendering layer consumes:
//! the scope-relative `label` of the thing that was checked, the stable
//! [`ErrorKind`], and the raw parameters that produced the failure. The
//! default English `message` is a convenience; renderers are free to ignore
//! it and re-render from `(label, kind, params)`.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static labels and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::kind::ErrorKind;

/// Raw parameters are typically 0-2 entries (`("bound", "5")`), so they
/// live inline.
type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// An immutable record of one failed check.
///
/// Owned by exactly one [`ValidationContext`](crate::ValidationContext)
/// once added; equality is structural.
///
/// # Examples
///
/// ```
/// use checktree::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(
///     "quantity",
///     ErrorKind::GreaterThan,
///     "quantity must be greater than 0",
/// )
/// .with_param("bound", "0");
///
/// assert_eq!(error.label(), "quantity");
/// assert_eq!(error.kind().as_str(), "validation.greaterThan");
/// assert_eq!(error.param("bound"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    label: Cow<'static, str>,
    kind: ErrorKind,
    message: Cow<'static, str>,
    params: Params,
}

impl ValidationError {
    /// Creates a new validation error.
    ///
    /// # Panics
    ///
    /// Panics if `label` is empty or `kind` carries an empty custom key.
    /// Both are contract errors at the call site, never part of a report.
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let label = label.into();
        assert!(!label.is_empty(), "error label must not be empty");
        assert!(
            !kind.as_str().is_empty(),
            "error kind key must not be empty"
        );
        Self {
            label,
            kind,
            message: message.into(),
            params: Params::new(),
        }
    }

    /// Appends a raw parameter for message templating.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// The scope-relative name of the thing that was checked.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The stable machine-readable kind.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The human-readable default message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All raw parameters, in insertion order.
    #[must_use]
    pub fn params(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
        &self.params
    }

    /// Looks up a raw parameter by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.label, self.message, self.kind)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("name", ErrorKind::Blank, "name cannot be blank");
        assert_eq!(error.label(), "name");
        assert_eq!(error.kind(), &ErrorKind::Blank);
        assert_eq!(error.message(), "name cannot be blank");
        assert!(error.params().is_empty());
    }

    #[test]
    fn test_params_preserve_insertion_order() {
        let error = ValidationError::new("age", ErrorKind::LessThan, "age must be less than 130")
            .with_param("bound", "130")
            .with_param("unit", "years");

        assert_eq!(error.param("bound"), Some("130"));
        assert_eq!(error.param("unit"), Some("years"));
        assert_eq!(error.param("missing"), None);
        assert_eq!(error.params()[0].0, "bound");
        assert_eq!(error.params()[1].0, "unit");
    }

    #[test]
    fn test_structural_equality() {
        let a = ValidationError::new("x", ErrorKind::Presence, "x must be present");
        let b = ValidationError::new("x", ErrorKind::Presence, "x must be present");
        assert_eq!(a, b);
        assert_ne!(a, a.clone().with_param("bound", "1"));
    }

    #[test]
    fn test_display() {
        let error = ValidationError::new("email", ErrorKind::Presence, "email must be present");
        assert_eq!(
            error.to_string(),
            "email: email must be present [validation.presence]"
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("email", ErrorKind::Presence, "email must be present");
        assert!(matches!(error.label, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    #[should_panic(expected = "error label must not be empty")]
    fn test_empty_label_panics() {
        let _ = ValidationError::new("", ErrorKind::Presence, "");
    }
}
