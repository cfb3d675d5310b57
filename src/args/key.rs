//! Flag key — a validated flag name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Reasons a string cannot be used as a flag key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagKeyError {
    #[error("flag key must not be empty")]
    Empty,

    #[error("flag key '{0}' must not contain '='")]
    ContainsEquals(String),

    #[error("flag key '{0}' must not contain whitespace")]
    ContainsWhitespace(String),

    #[error("flag key '{0}' must not start with '-' (pass the name without dashes)")]
    LeadingDash(String),
}

/// A flag name without its leading `--`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlagKey(String);

impl FlagKey {
    /// Validate `raw` as a flag key.
    pub fn parse(raw: &str) -> Result<Self, FlagKeyError> {
        if raw.is_empty() {
            return Err(FlagKeyError::Empty);
        }
        if raw.contains('=') {
            return Err(FlagKeyError::ContainsEquals(raw.to_string()));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(FlagKeyError::ContainsWhitespace(raw.to_string()));
        }
        if raw.starts_with('-') {
            return Err(FlagKeyError::LeadingDash(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Boolean form as it appears on the command line (`--key`).
    pub fn flag(&self) -> String {
        format!("--{}", self.0)
    }
}

impl FromStr for FlagKey {
    type Err = FlagKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FlagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FlagKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
