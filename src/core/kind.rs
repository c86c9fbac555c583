//! Stable error kinds
//!
//! Every failed check carries an [`ErrorKind`]: a machine-readable,
//! namespaced key a rendering layer can match on exhaustively instead of
//! comparing free-floating string constants. The built-in kinds cover the
//! standard validator set; [`ErrorKind::custom`] is the escape hatch for
//! consumer-supplied checks.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// ERROR KIND
// ============================================================================

/// Machine-readable identifier for a failed check.
///
/// The string form is stable across releases and namespaced under
/// `validation.`, e.g. `"validation.presence"`. Renderers that ignore the
/// default English message key their locale catalogs on this value.
///
/// # Examples
///
/// ```
/// use checktree::ErrorKind;
///
/// assert_eq!(ErrorKind::Presence.as_str(), "validation.presence");
/// assert_eq!(ErrorKind::custom("validation.vat").as_str(), "validation.vat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An optional value was absent.
    Presence,
    /// A collection was absent or had no elements.
    PresenceOrEmpty,
    /// A string was absent or whitespace-only.
    Blank,
    /// A value was not strictly greater than its bound.
    GreaterThan,
    /// A value was below its inclusive lower bound.
    GreaterThanOrEqualTo,
    /// A value was not strictly less than its bound.
    LessThan,
    /// A value was above its inclusive upper bound.
    LessThanOrEqualTo,
    /// A consumer-supplied key.
    Custom(Cow<'static, str>),
}

impl ErrorKind {
    /// Creates a custom kind from a consumer-supplied key.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty. An empty key is a contract error, not a
    /// validation failure.
    #[must_use]
    pub fn custom(key: impl Into<Cow<'static, str>>) -> Self {
        let key = key.into();
        assert!(!key.is_empty(), "error kind key must not be empty");
        Self::Custom(key)
    }

    /// Returns the stable namespaced key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Presence => "validation.presence",
            Self::PresenceOrEmpty => "validation.presenceOrEmpty",
            Self::Blank => "validation.blank",
            Self::GreaterThan => "validation.greaterThan",
            Self::GreaterThanOrEqualTo => "validation.greaterThanOrEqualTo",
            Self::LessThan => "validation.lessThan",
            Self::LessThanOrEqualTo => "validation.lessThanOrEqualTo",
            Self::Custom(key) => key,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the namespaced string so reports round-trip through JSON
// the same way they print.
impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
