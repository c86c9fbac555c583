//! The failure signal
//!
//! [`ValidationFailed`] is what a caller gets back from
//! [`Validation::into_result`](crate::Validation::into_result) when the
//! tree holds at least one error. It carries the populated root context so
//! the report can be rendered without re-running validation.

use crate::core::context::ValidationContext;

// ============================================================================
// VALIDATION FAILED
// ============================================================================

/// Error type carrying the failed root context.
///
/// Business failures never panic and never surface one at a time; the whole
/// structured tree travels in this single value.
///
/// # Examples
///
/// ```
/// use checktree::prelude::*;
///
/// let failure = Validation::new("signup")
///     .not_blank("   ", "username")
///     .into_result()
///     .unwrap_err();
///
/// assert_eq!(failure.context().label(), "signup");
/// assert_eq!(failure.context().error_count(), 1);
/// ```
#[derive(Debug, thiserror::Error)]
#[error("validation of '{}' failed with {} error(s)", .context.label(), .context.error_count())]
pub struct ValidationFailed {
    context: ValidationContext,
}

impl ValidationFailed {
    /// Wraps a populated root context.
    #[must_use]
    pub fn new(context: ValidationContext) -> Self {
        Self { context }
    }

    /// The root of the failed tree.
    #[must_use]
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Consumes the failure, yielding the tree.
    #[must_use]
    pub fn into_context(self) -> ValidationContext {
        self.context
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;
    use crate::core::kind::ErrorKind;

    #[test]
    fn test_display_summarizes_the_tree() {
        let mut context = ValidationContext::new("signup");
        context.add_error(ValidationError::new(
            "username",
            ErrorKind::Blank,
            "username cannot be blank",
        ));
        context.add_error(ValidationError::new(
            "email",
            ErrorKind::Presence,
            "email must be present",
        ));

        let failure = ValidationFailed::new(context);
        assert_eq!(
            failure.to_string(),
            "validation of 'signup' failed with 2 error(s)"
        );
    }

    #[test]
    fn test_into_context_returns_the_same_tree() {
        let mut context = ValidationContext::new("signup");
        context.add_error(ValidationError::new(
            "username",
            ErrorKind::Blank,
            "username cannot be blank",
        ));

        let context = ValidationFailed::new(context).into_context();
        assert_eq!(context.label(), "signup");
        assert_eq!(context.errors().len(), 1);
    }
}
