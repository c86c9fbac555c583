//! The scope tree
//!
//! A [`ValidationContext`] is one node in a label-named tree mirroring the
//! shape of the validated data: the errors accumulated against this scope,
//! the checks still pending (deferred mode), and the nested scopes below
//! it. Each node owns its children outright, so the tree is acyclic and
//! single-parent by construction and safe to hand to another thread as a
//! whole.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::core::error::ValidationError;
use crate::core::traits::Validator;

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// The accumulator node for one scope.
///
/// Created by [`Validation`](crate::Validation) for the root and for every
/// nested scope; readable afterwards as the structured error report.
/// Serializes to `{label, errors, nested}`; pending validators are a
/// build-time detail and are skipped.
///
/// Deliberately not `Clone`: a context belongs to exactly one owner, which
/// is what keeps the tree invariant structural rather than a caller
/// discipline.
#[derive(Serialize)]
pub struct ValidationContext {
    label: Cow<'static, str>,
    #[serde(skip)]
    validators: Vec<Box<dyn Validator>>,
    errors: Vec<ValidationError>,
    nested: Vec<ValidationContext>,
}

impl ValidationContext {
    /// Creates an empty context for the given scope.
    ///
    /// # Panics
    ///
    /// Panics if `label` is empty.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        let label = label.into();
        assert!(!label.is_empty(), "context label must not be empty");
        Self {
            label,
            validators: Vec::new(),
            errors: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// The name of this scope.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Errors accumulated against this scope, in declaration order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Child scopes, in declaration order.
    #[must_use]
    pub fn nested_contexts(&self) -> &[ValidationContext] {
        &self.nested
    }

    /// Number of checks registered but not yet evaluated.
    #[must_use]
    pub fn pending_validators(&self) -> usize {
        self.validators.len()
    }

    /// Appends an error to this scope.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Registers a check for the deferred evaluation pass.
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Attaches a child scope.
    ///
    /// Ownership of the child moves into this node, so no cycle check is
    /// needed: an owned tree cannot alias an ancestor.
    pub fn add_nested_context(&mut self, context: ValidationContext) {
        self.nested.push(context);
    }

    /// Evaluates every pending check in insertion order, appending an error
    /// for each failure, then recurses into nested scopes in insertion
    /// order.
    ///
    /// Checks are pure, so re-running is safe but appends the same errors
    /// again; call this exactly once per tree.
    pub fn validate(&mut self) {
        for validator in &self.validators {
            if validator.is_invalid() {
                self.errors.push(validator.build_error());
            }
        }
        tracing::trace!(
            label = %self.label,
            pending = self.validators.len(),
            errors = self.errors.len(),
            "evaluated pending checks"
        );
        for child in &mut self.nested {
            child.validate();
        }
    }

    /// Whether this scope or any scope below it has errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.nested.iter().any(ValidationContext::has_errors)
    }

    /// Total number of errors in this subtree.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
            + self
                .nested
                .iter()
                .map(ValidationContext::error_count)
                .sum::<usize>()
    }

    /// Flattens the subtree into `(scope path, error)` pairs, depth-first.
    ///
    /// The path joins the context labels from this node down with `.` and
    /// ends in the error's own label, e.g. `"order.address.street"` — the
    /// shape a rendering layer keys field-level messages on.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &ValidationError)> {
        let mut out = Vec::new();
        self.collect_flat(None, &mut out);
        out
    }

    fn collect_flat<'a>(&'a self, prefix: Option<&str>, out: &mut Vec<(String, &'a ValidationError)>) {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{}", self.label),
            None => self.label.to_string(),
        };
        for error in &self.errors {
            out.push((format!("{path}.{}", error.label()), error));
        }
        for child in &self.nested {
            child.collect_flat(Some(&path), out);
        }
    }
}

// Manual impl: boxed validators have nothing useful to print, so show how
// many are pending instead.
impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("label", &self.label)
            .field("pending", &self.validators.len())
            .field("errors", &self.errors)
            .field("nested", &self.nested)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kind::ErrorKind;
    use crate::validators::Presence;

    fn error(label: &'static str) -> ValidationError {
        ValidationError::new(label, ErrorKind::Presence, format!("{label} must be present"))
    }

    #[test]
    fn test_add_error_sets_has_errors_up_the_tree() {
        let mut leaf = ValidationContext::new("street");
        leaf.add_error(error("name"));

        let mut middle = ValidationContext::new("address");
        middle.add_nested_context(leaf);

        let mut root = ValidationContext::new("order");
        root.add_nested_context(middle);

        assert!(root.has_errors());
        assert!(root.errors().is_empty());
        assert_eq!(root.error_count(), 1);
    }

    #[test]
    fn test_clean_tree_has_no_errors() {
        let mut root = ValidationContext::new("order");
        root.add_nested_context(ValidationContext::new("address"));
        assert!(!root.has_errors());
        assert_eq!(root.error_count(), 0);
    }

    #[test]
    fn test_validate_evaluates_in_insertion_order() {
        let mut ctx = ValidationContext::new("root");
        ctx.add_validator(Box::new(Presence::new(None::<&str>, "first")));
        ctx.add_validator(Box::new(Presence::new(Some(&"here"), "second")));
        ctx.add_validator(Box::new(Presence::new(None::<&str>, "third")));

        assert_eq!(ctx.pending_validators(), 3);
        assert!(!ctx.has_errors());

        ctx.validate();

        let labels: Vec<&str> = ctx.errors().iter().map(ValidationError::label).collect();
        assert_eq!(labels, ["first", "third"]);
    }

    #[test]
    fn test_validate_recurses_into_nested_scopes() {
        let mut child = ValidationContext::new("address");
        child.add_validator(Box::new(Presence::new(None::<&str>, "street")));

        let mut root = ValidationContext::new("order");
        root.add_nested_context(child);

        root.validate();

        assert!(root.has_errors());
        assert_eq!(root.nested_contexts()[0].errors()[0].label(), "street");
    }

    #[test]
    fn test_flatten_joins_labels_with_dots() {
        let mut leaf = ValidationContext::new("address");
        leaf.add_error(error("street"));

        let mut root = ValidationContext::new("order");
        root.add_error(error("id"));
        root.add_nested_context(leaf);

        let paths: Vec<String> = root.flatten().into_iter().map(|(path, _)| path).collect();
        assert_eq!(paths, ["order.id", "order.address.street"]);
    }

    #[test]
    #[should_panic(expected = "context label must not be empty")]
    fn test_empty_label_panics() {
        let _ = ValidationContext::new("");
    }
}
