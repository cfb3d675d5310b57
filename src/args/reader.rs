//! Flag reader — look up one named flag in an argument list.
//!
//! A flag is supplied either in boolean form (`--key`) or in value form
//! (`--key=value`). Matching is literal: the key is compared as text, never
//! compiled into a pattern, so keys like `a.b` only match `--a.b`.

use tracing::debug;

use crate::args::key::FlagKey;
use crate::args::value::FlagValue;

/// Read `key` from `args`.
///
/// - Any entry equal to `--key` yields [`FlagValue::Present`], even when a
///   `--key=value` entry also exists.
/// - Otherwise the first entry starting with `--key=` yields
///   [`FlagValue::Value`] with the text after `=` up to the first space.
///   `--key=` yields an empty value.
/// - Otherwise [`FlagValue::Absent`]. An empty key is always absent.
pub fn read_flag<S: AsRef<str>>(args: &[S], key: &str) -> FlagValue {
    if key.is_empty() {
        return FlagValue::Absent;
    }

    let boolean_form = format!("--{key}");
    let value_prefix = format!("--{key}=");

    // Boolean form takes precedence over value form wherever it appears.
    if args.iter().any(|arg| arg.as_ref() == boolean_form) {
        debug!(key, "flag present in boolean form");
        return FlagValue::Present;
    }

    let value = args
        .iter()
        .find_map(|arg| arg.as_ref().strip_prefix(value_prefix.as_str()))
        .map(extract_value);

    match value {
        Some(value) => {
            debug!(key, value, "flag present in value form");
            FlagValue::Value(value.to_string())
        }
        None => {
            debug!(key, "flag absent");
            FlagValue::Absent
        }
    }
}

/// Text up to (not including) the first space.
fn extract_value(rest: &str) -> &str {
    match rest.find(' ') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// An owned argument list that flags can be read from repeatedly.
#[derive(Debug, Clone, Default)]
pub struct FlagReader {
    args: Vec<String>,
}

impl FlagReader {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Capture the current process arguments.
    ///
    /// Non-UTF-8 arguments are converted lossily.
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Read `key`. See [`read_flag`].
    pub fn get(&self, key: &str) -> FlagValue {
        read_flag(&self.args, key)
    }

    pub fn get_key(&self, key: &FlagKey) -> FlagValue {
        read_flag(&self.args, key.as_str())
    }
}
