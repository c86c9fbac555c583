//! Prelude module for convenient imports.
//!
//! Provides a single `use checktree::prelude::*;` import that brings in the
//! builder, the core report types, and the built-in validators.
//!
//! # Examples
//!
//! ```
//! use checktree::prelude::*;
//!
//! let v = Validation::new("payload").greater_than(3, 0, "retries");
//! assert!(!v.has_errors());
//! ```

// ============================================================================
// CORE: report types, check trait, failure signal
// ============================================================================

pub use crate::core::{ErrorKind, ValidationContext, ValidationError, ValidationFailed, Validator};

// ============================================================================
// BUILDER
// ============================================================================

pub use crate::validation::{EvaluationMode, Validation};

// ============================================================================
// VALIDATORS: the built-in check set
// ============================================================================

pub use crate::validators::{
    Custom, GreaterThan, GreaterThanOrEqualTo, LessThan, LessThanOrEqualTo, NotBlank, Presence,
    PresenceOrEmpty,
};
