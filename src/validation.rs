//! The fluent builder
//!
//! [`Validation`] is the surface callers live on: construct one for a root
//! scope, chain checks, descend into nested scopes, then either inspect the
//! tree (silent mode) or convert it into a `Result`.
//!
//! Every check funnels through [`Validation::is_valid`], which applies the
//! active [`EvaluationMode`]: immediate mode evaluates at declaration and
//! folds failures straight into the context; deferred mode registers the
//! check and leaves evaluation to [`Validation::validate`].

use std::borrow::Cow;
use std::fmt;

use crate::core::{ErrorKind, ValidationContext, ValidationError, ValidationFailed, Validator};
use crate::validators::{
    GreaterThan, GreaterThanOrEqualTo, LessThan, LessThanOrEqualTo, NotBlank, Presence,
    PresenceOrEmpty,
};

// ============================================================================
// EVALUATION MODE
// ============================================================================

/// When declared checks are evaluated.
///
/// Threaded through construction and shared by every nested scope; there is
/// no way to switch modes mid-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationMode {
    /// Checks run as they are declared. The default: no `validate()` step
    /// to forget.
    #[default]
    Immediate,
    /// Checks are registered and run as a batch by
    /// [`Validation::validate`].
    Deferred,
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Fluent builder over one [`ValidationContext`].
///
/// Chainable by consuming `self`; a `Validation` lives for one declare /
/// evaluate / read cycle and is discarded afterwards.
///
/// # Examples
///
/// ```
/// use checktree::prelude::*;
///
/// let result = Validation::new("signup")
///     .not_blank("alice", "username")
///     .greater_than(21, 18, "age")
///     .into_result();
///
/// assert!(result.is_ok());
/// ```
#[derive(Debug)]
pub struct Validation {
    context: ValidationContext,
    mode: EvaluationMode,
}

impl Validation {
    /// Creates a validation for a root scope in immediate mode.
    ///
    /// # Panics
    ///
    /// Panics if `label` is empty.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self::with_mode(label, EvaluationMode::default())
    }

    /// Creates a validation for a root scope with an explicit mode.
    ///
    /// # Panics
    ///
    /// Panics if `label` is empty.
    #[must_use]
    pub fn with_mode(label: impl Into<Cow<'static, str>>, mode: EvaluationMode) -> Self {
        Self {
            context: ValidationContext::new(label),
            mode,
        }
    }

    /// The mode this validation (and every scope nested under it) runs in.
    #[must_use]
    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    // ------------------------------------------------------------------
    // Built-in checks
    // ------------------------------------------------------------------

    /// Checks that an optional value is present.
    #[must_use = "builder methods must be chained or built"]
    pub fn presence<T: ?Sized>(
        self,
        value: Option<&T>,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.is_valid(Presence::new(value, label))
    }

    /// [`presence`](Self::presence) with an overridden error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn presence_with_key<T: ?Sized>(
        self,
        value: Option<&T>,
        label: impl Into<Cow<'static, str>>,
        key: ErrorKind,
    ) -> Self {
        self.is_valid(Presence::new(value, label).with_key(key))
    }

    /// Checks that an optional collection is present and non-empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn presence_or_empty<T>(
        self,
        value: Option<&[T]>,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.is_valid(PresenceOrEmpty::new(value, label))
    }

    /// [`presence_or_empty`](Self::presence_or_empty) with an overridden
    /// error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn presence_or_empty_with_key<T>(
        self,
        value: Option<&[T]>,
        label: impl Into<Cow<'static, str>>,
        key: ErrorKind,
    ) -> Self {
        self.is_valid(PresenceOrEmpty::new(value, label).with_key(key))
    }

    /// Checks that a string is present and not whitespace-only.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_blank<'a>(
        self,
        value: impl Into<Option<&'a str>>,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.is_valid(NotBlank::new(value, label))
    }

    /// [`not_blank`](Self::not_blank) with an overridden error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn not_blank_with_key<'a>(
        self,
        value: impl Into<Option<&'a str>>,
        label: impl Into<Cow<'static, str>>,
        key: ErrorKind,
    ) -> Self {
        self.is_valid(NotBlank::new(value, label).with_key(key))
    }

    /// Checks that `value` is strictly greater than `bound`.
    ///
    /// The subject is taken by value; guard absence with a prior
    /// [`presence`](Self::presence) check.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than<T>(self, value: T, bound: T, label: impl Into<Cow<'static, str>>) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(GreaterThan::new(value, bound, label))
    }

    /// [`greater_than`](Self::greater_than) with an overridden error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than_with_key<T>(
        self,
        value: T,
        bound: T,
        label: impl Into<Cow<'static, str>>,
        key: ErrorKind,
    ) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(GreaterThan::new(value, bound, label).with_key(key))
    }

    /// Checks that `value` is at or above the inclusive `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than_or_equal_to<T>(
        self,
        value: T,
        bound: T,
        label: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(GreaterThanOrEqualTo::new(value, bound, label))
    }

    /// [`greater_than_or_equal_to`](Self::greater_than_or_equal_to) with an
    /// overridden error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_than_or_equal_to_with_key<T>(
        self,
        value: T,
        bound: T,
        label: impl Into<Cow<'static, str>>,
        key: ErrorKind,
    ) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(GreaterThanOrEqualTo::new(value, bound, label).with_key(key))
    }

    /// Checks that `value` is strictly less than `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than<T>(self, value: T, bound: T, label: impl Into<Cow<'static, str>>) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(LessThan::new(value, bound, label))
    }

    /// [`less_than`](Self::less_than) with an overridden error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than_with_key<T>(
        self,
        value: T,
        bound: T,
        label: impl Into<Cow<'static, str>>,
        key: ErrorKind,
    ) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(LessThan::new(value, bound, label).with_key(key))
    }

    /// Checks that `value` is at or below the inclusive `bound`.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than_or_equal_to<T>(
        self,
        value: T,
        bound: T,
        label: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(LessThanOrEqualTo::new(value, bound, label))
    }

    /// [`less_than_or_equal_to`](Self::less_than_or_equal_to) with an
    /// overridden error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_than_or_equal_to_with_key<T>(
        self,
        value: T,
        bound: T,
        label: impl Into<Cow<'static, str>>,
        key: ErrorKind,
    ) -> Self
    where
        T: PartialOrd + fmt::Display + 'static,
    {
        self.is_valid(LessThanOrEqualTo::new(value, bound, label).with_key(key))
    }

    // ------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------

    /// Folds any check into this scope per the active mode.
    ///
    /// Immediate mode evaluates now; deferred mode registers the check for
    /// [`validate`](Self::validate). Every built-in check goes through
    /// here, so consumer-supplied [`Validator`]s behave identically.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_valid(mut self, validator: impl Validator + 'static) -> Self {
        match self.mode {
            EvaluationMode::Immediate => {
                if validator.is_invalid() {
                    self.context.add_error(validator.build_error());
                }
            }
            EvaluationMode::Deferred => self.context.add_validator(Box::new(validator)),
        }
        self
    }

    /// Runs a zero-argument closure; a returned error is folded into this
    /// scope immediately, in both modes.
    ///
    /// The lighter-weight sibling of [`is_valid`](Self::is_valid) for
    /// one-off rules that already know their error.
    #[must_use = "builder methods must be chained or built"]
    pub fn check(mut self, f: impl FnOnce() -> Option<ValidationError>) -> Self {
        if let Some(error) = f() {
            self.context.add_error(error);
        }
        self
    }

    /// Validates a nested resource under a child scope.
    ///
    /// Creates a child context labeled `label`, hands `(value, child)` to
    /// `f` for its own chain of checks, and attaches the returned child's
    /// context to this one. The child shares this validation's mode.
    ///
    /// # Panics
    ///
    /// Panics if `label` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checktree::prelude::*;
    ///
    /// struct Address {
    ///     street: Option<String>,
    /// }
    ///
    /// let address = Address { street: None };
    /// let v = Validation::new("order")
    ///     .nested(&address, "address", |address, v| {
    ///         v.presence(address.street.as_ref(), "street")
    ///     });
    ///
    /// assert!(v.has_errors());
    /// assert!(v.context().errors().is_empty());
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn nested<T>(
        mut self,
        value: T,
        label: impl Into<Cow<'static, str>>,
        f: impl FnOnce(T, Validation) -> Validation,
    ) -> Self {
        let child = Self {
            context: ValidationContext::new(label),
            mode: self.mode,
        };
        let child = f(value, child);
        self.context.add_nested_context(child.into_context());
        self
    }

    /// Merges another validation's tree into this one as a nested scope.
    ///
    /// Combines independently-built trees (two aspects of the same object,
    /// validated separately) into one report. In deferred mode the other
    /// tree's pending checks ride along and are evaluated by this tree's
    /// [`validate`](Self::validate).
    #[must_use = "builder methods must be chained or built"]
    pub fn merge(mut self, other: Validation) -> Self {
        self.context.add_nested_context(other.into_context());
        self
    }

    // ------------------------------------------------------------------
    // Evaluation and reads
    // ------------------------------------------------------------------

    /// Runs the deferred evaluation pass over the whole tree.
    ///
    /// A no-op when nothing is pending, which is always the case in
    /// immediate mode. Call exactly once; checks are pure, so a second
    /// pass would append the same errors again.
    #[must_use = "builder methods must be chained or built"]
    pub fn validate(mut self) -> Self {
        self.context.validate();
        self
    }

    /// Whether the tree (transitively) has any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.context.has_errors()
    }

    /// The root context, for silent-mode inspection.
    #[must_use]
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Consumes the builder, yielding the tree regardless of outcome.
    #[must_use]
    pub fn into_context(self) -> ValidationContext {
        self.context
    }

    /// Converts the tree into a `Result`.
    ///
    /// `Ok` carries the clean tree; `Err` carries the very same tree inside
    /// a [`ValidationFailed`]. Business failures never panic — this is the
    /// only place they surface as an error value.
    pub fn into_result(self) -> Result<ValidationContext, ValidationFailed> {
        if self.context.has_errors() {
            tracing::debug!(
                label = %self.context.label(),
                errors = self.context.error_count(),
                "validation failed"
            );
            Err(ValidationFailed::new(self.context))
        } else {
            Ok(self.context)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::Custom;

    #[test]
    fn test_default_mode_is_immediate() {
        assert_eq!(Validation::new("root").mode(), EvaluationMode::Immediate);
    }

    #[test]
    fn test_immediate_mode_folds_failures_at_declaration() {
        let v = Validation::new("signup").not_blank("  ", "username");
        assert!(v.has_errors());
        assert_eq!(v.context().errors()[0].kind(), &ErrorKind::Blank);
    }

    #[test]
    fn test_passing_checks_add_nothing() {
        let v = Validation::new("signup")
            .not_blank("alice", "username")
            .presence(Some(&"a@example.com"), "email")
            .greater_than(21, 18, "age");
        assert!(!v.has_errors());
        assert!(v.context().errors().is_empty());
    }

    #[test]
    fn test_deferred_mode_waits_for_validate() {
        let v = Validation::with_mode("signup", EvaluationMode::Deferred)
            .not_blank("  ", "username")
            .presence(None::<&str>, "email");

        assert!(!v.has_errors());
        assert_eq!(v.context().pending_validators(), 2);

        let v = v.validate();
        assert!(v.has_errors());
        let labels: Vec<&str> = v.context().errors().iter().map(ValidationError::label).collect();
        assert_eq!(labels, ["username", "email"]);
    }

    #[test]
    fn test_nested_shares_mode() {
        let v = Validation::with_mode("order", EvaluationMode::Deferred)
            .nested((), "address", |(), v| {
                assert_eq!(v.mode(), EvaluationMode::Deferred);
                v.not_blank(None, "street")
            });

        assert!(!v.has_errors());
        let v = v.validate();
        assert!(v.has_errors());
    }

    #[test]
    fn test_check_folds_supplied_error_immediately() {
        let v = Validation::with_mode("order", EvaluationMode::Deferred).check(|| {
            Some(ValidationError::new(
                "total",
                ErrorKind::custom("validation.total"),
                "total does not add up",
            ))
        });
        // No validate() call needed; the closure ran at declaration.
        assert!(v.has_errors());
    }

    #[test]
    fn test_custom_validator_through_is_valid() {
        let v = Validation::new("order").is_valid(Custom::new(
            || false,
            "sku",
            ErrorKind::custom("validation.sku"),
            "sku is not sellable",
        ));
        assert_eq!(v.context().errors()[0].kind().as_str(), "validation.sku");
    }

    #[test]
    #[should_panic(expected = "context label must not be empty")]
    fn test_empty_root_label_panics() {
        let _ = Validation::new("");
    }
}
