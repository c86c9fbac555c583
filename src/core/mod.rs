//! Core validation types
//!
//! The foundational pieces of the engine:
//!
//! - **Kinds**: [`ErrorKind`] — stable, enumerated error keys
//! - **Errors**: [`ValidationError`] — the (label, kind, params) record of
//!   one failure
//! - **Checks**: [`Validator`] — the uniform pass/fail abstraction
//! - **Tree**: [`ValidationContext`] — the scope-labeled accumulator
//! - **Signal**: [`ValidationFailed`] — the error carrying a failed tree
//!
//! Callers rarely touch these directly; the fluent
//! [`Validation`](crate::Validation) builder drives them. They are public
//! because rendering layers read the tree and consumer crates implement
//! [`Validator`] for their own checks.

pub mod context;
pub mod error;
pub mod failure;
pub mod kind;
pub mod traits;

pub use context::ValidationContext;
pub use error::ValidationError;
pub use failure::ValidationFailed;
pub use kind::ErrorKind;
pub use traits::Validator;
