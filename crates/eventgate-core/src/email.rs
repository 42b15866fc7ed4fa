use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

// `$` in the regex crate matches only at the end of the text, so a trailing
// newline is rejected. `\s` leaves out the ASCII separators \x1C-\x1F, so
// they are excluded explicitly.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s\x1C-\x1F]+@[^@\s\x1C-\x1F]+\.[^@\s\x1C-\x1F]+$").expect("invalid regex")
});

/// Returns true if `value` looks like `local@domain.tld` with no whitespace.
///
/// This is a shape check only. No DNS or deliverability checks are made.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// A string that passed [`is_email`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses a validated email address from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !is_email(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "EmailAddress",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Returns the lowercased address.
    pub fn to_lowercase(&self) -> Self {
        // Lowercasing never introduces whitespace or `@`, so the shape holds.
        Self(self.0.to_lowercase())
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
