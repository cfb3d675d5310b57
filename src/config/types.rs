use serde::{Deserialize, Serialize};

use crate::args::FlagKind;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    /// Declared flags, in the order they are reported.
    #[serde(default)]
    pub flags: Vec<FlagConfig>,
}

/// How results are printed by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `true`, `false` or the raw value.
    #[default]
    Plain,
    /// JSON `true`, `false` or `"value"`.
    Json,
}

/// A declared flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagConfig {
    /// Flag name without dashes (e.g., "port").
    pub key: String,
    #[serde(default)]
    pub kind: FlagKind,
    #[serde(default)]
    pub description: String,
    /// Value reported when the flag is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}
