//! Passenger name type with validation.
//!
//! A seat's occupant and every waiting-list entry is a [`PassengerName`].
//! Emptiness is represented by the *absence* of a name, never by a blank
//! string, so the name type rejects blank input at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated passenger name.
///
/// Names are trimmed of surrounding whitespace and must be non-empty after
/// trimming.
///
/// # Examples
///
/// ```
/// use cabin::PassengerName;
///
/// let name = PassengerName::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
///
/// // Surrounding whitespace is trimmed
/// let name = PassengerName::new("  Bob  ").unwrap();
/// assert_eq!(name.as_str(), "Bob");
///
/// // Blank names are invalid
/// assert!(PassengerName::new("").is_err());
/// assert!(PassengerName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerName(String);

impl PassengerName {
    /// Creates a passenger name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidNameError {
                reason: "name must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for PassengerName {
    type Error = InvalidNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for PassengerName {
    type Error = InvalidNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for PassengerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PassengerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid passenger names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNameError {
    /// The reason the name is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid passenger name: {}", self.reason)
    }
}

impl std::error::Error for InvalidNameError {}
