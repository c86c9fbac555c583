//! Built-in validators
//!
//! The standard check set, one file per family:
//!
//! - **Presence**: [`Presence`], [`PresenceOrEmpty`]
//! - **Blankness**: [`NotBlank`]
//! - **Ordering**: [`GreaterThan`], [`GreaterThanOrEqualTo`], [`LessThan`],
//!   [`LessThanOrEqualTo`]
//! - **Escape hatch**: [`Custom`]
//!
//! Each carries its own label and a default [`ErrorKind`](crate::ErrorKind)
//! overridable via `with_key`. All are stateless after construction and
//! safe to evaluate any number of times.

mod blank;
mod custom;
mod ordering;
mod presence;

pub use blank::NotBlank;
pub use custom::Custom;
pub use ordering::{GreaterThan, GreaterThanOrEqualTo, LessThan, LessThanOrEqualTo};
pub use presence::{Presence, PresenceOrEmpty};
