//! Ordering validators
//!
//! Comparison of a subject against a bound using the subject's
//! `PartialOrd`, strict or inclusive per variant. The subject is taken by
//! value; absence must be guarded by a prior presence check — these
//! validators make no attempt at null-safety. A comparison that is
//! undefined for the type (e.g. against NaN) fails the check.
//!
//! The four variants differ only in operator, default kind, and message
//! phrase, so a local macro stamps them out.

use std::borrow::Cow;
use std::fmt;

use crate::core::{ErrorKind, ValidationError, Validator};

macro_rules! comparison_validator {
    (
        $(#[$doc:meta])*
        $name:ident, $op:tt, $kind:ident, $phrase:literal
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            value: T,
            bound: T,
            label: Cow<'static, str>,
            kind: ErrorKind,
        }

        impl<T: PartialOrd + fmt::Display> $name<T> {
            /// Creates the comparison check.
            #[must_use]
            pub fn new(value: T, bound: T, label: impl Into<Cow<'static, str>>) -> Self {
                Self {
                    value,
                    bound,
                    label: label.into(),
                    kind: ErrorKind::$kind,
                }
            }

            /// Overrides the default error kind.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_key(mut self, kind: ErrorKind) -> Self {
                self.kind = kind;
                self
            }
        }

        impl<T: PartialOrd + fmt::Display> Validator for $name<T> {
            fn is_valid(&self) -> bool {
                self.value $op self.bound
            }

            fn build_error(&self) -> ValidationError {
                ValidationError::new(
                    self.label.clone(),
                    self.kind.clone(),
                    format!(
                        concat!("{} must be ", $phrase, " {}"),
                        self.label, self.bound
                    ),
                )
                .with_param("bound", self.bound.to_string())
            }
        }
    };
}

comparison_validator! {
    /// Checks that a value is strictly greater than a lower bound.
    ///
    /// ```
    /// use checktree::prelude::*;
    ///
    /// assert!(GreaterThan::new(6, 5, "quantity").is_valid());
    /// assert!(GreaterThan::new(5, 5, "quantity").is_invalid());
    /// ```
    GreaterThan, >, GreaterThan, "greater than"
}

comparison_validator! {
    /// Checks that a value is at or above an inclusive lower bound.
    GreaterThanOrEqualTo, >=, GreaterThanOrEqualTo, "greater than or equal to"
}

comparison_validator! {
    /// Checks that a value is strictly less than an upper bound.
    LessThan, <, LessThan, "less than"
}

comparison_validator! {
    /// Checks that a value is at or below an inclusive upper bound.
    LessThanOrEqualTo, <=, LessThanOrEqualTo, "less than or equal to"
}

// ============================================================================
// TESTS
// ============================================================================
