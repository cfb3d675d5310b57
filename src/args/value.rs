//! Flag value — the result of reading one flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of looking up a flag in an argument list.
///
/// Serializes to the same three JSON shapes a caller expects:
/// `true`, `"value"` or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFlagValue", into = "RawFlagValue")]
pub enum FlagValue {
    /// Boolean form (`--key`).
    Present,
    /// Value form (`--key=value`). May be empty.
    Value(String),
    /// Flag not supplied.
    #[default]
    Absent,
}

impl FlagValue {
    /// True for any supplied form, including an empty value.
    pub fn is_present(&self) -> bool {
        !matches!(self, FlagValue::Absent)
    }

    /// True only for the boolean form.
    pub fn as_bool(&self) -> bool {
        matches!(self, FlagValue::Present)
    }

    /// Extracted value, if the flag was given in value form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Value(v) => Some(v),
            FlagValue::Present | FlagValue::Absent => None,
        }
    }

    /// Extracted value, or `default` for the boolean and absent forms.
    pub fn value_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.as_str().unwrap_or(default)
    }
}

impl From<bool> for FlagValue {
    fn from(present: bool) -> Self {
        if present {
            FlagValue::Present
        } else {
            FlagValue::Absent
        }
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Value(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Value(value.to_string())
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Present => f.write_str("true"),
            FlagValue::Value(v) => f.write_str(v),
            FlagValue::Absent => f.write_str("false"),
        }
    }
}

/// Wire shape: a JSON bool or string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFlagValue {
    Bool(bool),
    Text(String),
}

impl From<RawFlagValue> for FlagValue {
    fn from(raw: RawFlagValue) -> Self {
        match raw {
            RawFlagValue::Bool(b) => FlagValue::from(b),
            RawFlagValue::Text(s) => FlagValue::Value(s),
        }
    }
}

impl From<FlagValue> for RawFlagValue {
    fn from(value: FlagValue) -> Self {
        match value {
            FlagValue::Present => RawFlagValue::Bool(true),
            FlagValue::Value(v) => RawFlagValue::Text(v),
            FlagValue::Absent => RawFlagValue::Bool(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_source_shapes() {
        assert_eq!(serde_json::to_string(&FlagValue::Present).unwrap(), "true");
        assert_eq!(serde_json::to_string(&FlagValue::Absent).unwrap(), "false");
        assert_eq!(
            serde_json::to_string(&FlagValue::from("8080")).unwrap(),
            "\"8080\""
        );
    }

    #[test]
    fn deserializes_bool_and_string() {
        let v: FlagValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, FlagValue::Present);
        let v: FlagValue = serde_json::from_str("\"\"").unwrap();
        assert_eq!(v, FlagValue::Value(String::new()));
    }

    #[test]
    fn empty_value_is_still_present() {
        let v = FlagValue::from("");
        assert!(v.is_present());
        assert!(!v.as_bool());
        assert_eq!(v.as_str(), Some(""));
    }

    #[test]
    fn value_or_falls_back() {
        assert_eq!(FlagValue::Absent.value_or("7000"), "7000");
        assert_eq!(FlagValue::Present.value_or("7000"), "7000");
        assert_eq!(FlagValue::from("8080").value_or("7000"), "8080");
    }

    #[test]
    fn display_matches_plain_output() {
        assert_eq!(FlagValue::Present.to_string(), "true");
        assert_eq!(FlagValue::Absent.to_string(), "false");
        assert_eq!(FlagValue::from("prod").to_string(), "prod");
    }
}
