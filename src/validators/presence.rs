//! Presence validators

use std::borrow::Cow;

use crate::core::{ErrorKind, ValidationError, Validator};

// ============================================================================
// PRESENCE
// ============================================================================

/// Checks that an optional value is present.
///
/// The check samples the subject when constructed: holding an `Option<&T>`
/// across the builder chain would thread the subject's lifetime through the
/// whole context tree. Checks are pure, so sampling is observationally
/// equivalent to re-reading the subject at evaluation time.
///
/// # Examples
///
/// ```
/// use checktree::prelude::*;
///
/// let email: Option<String> = None;
/// assert!(Presence::new(email.as_ref(), "email").is_invalid());
/// assert!(Presence::new(Some(&42), "age").is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Presence {
    present: bool,
    label: Cow<'static, str>,
    kind: ErrorKind,
}

impl Presence {
    /// Creates a presence check over an optional value.
    #[must_use]
    pub fn new<T: ?Sized>(value: Option<&T>, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            present: value.is_some(),
            label: label.into(),
            kind: ErrorKind::Presence,
        }
    }

    /// Overrides the default error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Validator for Presence {
    fn is_valid(&self) -> bool {
        self.present
    }

    fn build_error(&self) -> ValidationError {
        ValidationError::new(
            self.label.clone(),
            self.kind.clone(),
            format!("{} must be present", self.label),
        )
    }
}

// ============================================================================
// PRESENCE OR EMPTY
// ============================================================================

/// Checks that an optional collection is present and has at least one
/// element.
///
/// # Examples
///
/// ```
/// use checktree::prelude::*;
///
/// let empty: Option<&[i32]> = Some(&[]);
/// assert!(PresenceOrEmpty::new(Some(&[1, 2][..]), "items").is_valid());
/// assert!(PresenceOrEmpty::new(empty, "items").is_invalid());
/// assert!(PresenceOrEmpty::new(None::<&[i32]>, "items").is_invalid());
/// ```
#[derive(Debug, Clone)]
pub struct PresenceOrEmpty {
    populated: bool,
    label: Cow<'static, str>,
    kind: ErrorKind,
}

impl PresenceOrEmpty {
    /// Creates a non-empty-collection check over an optional slice.
    #[must_use]
    pub fn new<T>(value: Option<&[T]>, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            populated: value.is_some_and(|c| !c.is_empty()),
            label: label.into(),
            kind: ErrorKind::PresenceOrEmpty,
        }
    }

    /// Overrides the default error kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Validator for PresenceOrEmpty {
    fn is_valid(&self) -> bool {
        self.populated
    }

    fn build_error(&self) -> ValidationError {
        ValidationError::new(
            self.label.clone(),
            self.kind.clone(),
            format!("{} must be present and not empty", self.label),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
