//! Consumer-supplied checks

use std::borrow::Cow;
use std::fmt;

use crate::core::{ErrorKind, ValidationError, Validator};

// ============================================================================
// CUSTOM
// ============================================================================

/// Wraps a zero-argument predicate and an explicit error template.
///
/// The escape hatch for business rules the standard set does not cover.
/// The predicate must be pure: it may be evaluated more than once and must
/// return the same verdict each time.
///
/// # Examples
///
/// ```
/// use checktree::prelude::*;
///
/// let quantity = 7;
/// let check = Custom::new(
///     move || quantity % 2 == 0,
///     "quantity",
///     ErrorKind::custom("validation.even"),
///     "quantity must be even",
/// );
/// assert!(check.is_invalid());
/// assert_eq!(check.build_error().kind().as_str(), "validation.even");
/// ```
pub struct Custom<F> {
    predicate: F,
    label: Cow<'static, str>,
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl<F: Fn() -> bool> Custom<F> {
    /// Creates a custom check from a predicate and its error template.
    #[must_use]
    pub fn new(
        predicate: F,
        label: impl Into<Cow<'static, str>>,
        kind: ErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            predicate,
            label: label.into(),
            kind,
            message: message.into(),
        }
    }
}

impl<F: Fn() -> bool> Validator for Custom<F> {
    fn is_valid(&self) -> bool {
        (self.predicate)()
    }

    fn build_error(&self) -> ValidationError {
        ValidationError::new(self.label.clone(), self.kind.clone(), self.message.clone())
    }
}

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("predicate", &"<function>")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
