//! # checktree
//!
//! Fluent validation with scope-labeled, hierarchical error reports.
//!
//! Declare checks against a named scope, descend into nested scopes that
//! mirror the shape of the data, and read the failures back as a structured
//! tree instead of a flat message list.
//!
//! ## Quick Start
//!
//! ```rust
//! use checktree::prelude::*;
//!
//! let result = Validation::new("signup")
//!     .not_blank("alice", "username")
//!     .greater_than(21, 18, "age")
//!     .into_result();
//! assert!(result.is_ok());
//!
//! let failure = Validation::new("signup")
//!     .not_blank("   ", "username")
//!     .into_result()
//!     .unwrap_err();
//! let report = failure.context();
//! assert_eq!(report.errors()[0].label(), "username");
//! assert_eq!(report.errors()[0].kind().as_str(), "validation.blank");
//! ```
//!
//! ## Nested scopes
//!
//! Sub-objects get their own labeled scope via
//! [`Validation::nested`]; independently-built trees combine via
//! [`Validation::merge`]. The resulting [`ValidationContext`] tree
//! preserves declaration order everywhere, serializes with `serde`, and
//! flattens into dotted scope paths for field-level rendering.
//!
//! ## Evaluation modes
//!
//! Immediate mode (the default) runs every check as it is declared.
//! [`EvaluationMode::Deferred`] registers checks and runs them as a batch
//! when [`Validation::validate`] is called. One mode governs a whole tree.
//!
//! ## Failure model
//!
//! A failing business check never panics; it adds a [`ValidationError`] to
//! its scope. Only [`Validation::into_result`] converts a dirty tree into
//! a [`ValidationFailed`] value. Contract misuse (an empty label, an empty
//! custom key) panics at the call site.

pub mod core;
pub mod prelude;
pub mod validators;

mod validation;

pub use crate::core::{ErrorKind, ValidationContext, ValidationError, ValidationFailed, Validator};
pub use crate::validation::{EvaluationMode, Validation};
