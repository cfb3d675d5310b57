//! Flag registry — declared flags read together in one pass.

use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::args::key::FlagKey;
use crate::args::reader::read_flag;
use crate::args::value::FlagValue;

/// Which form a declared flag is expected in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// Boolean form only (e.g., `--watch`).
    Switch,
    /// Value form only (e.g., `--port=8080`).
    Valued,
    /// Either form.
    #[default]
    Any,
}

/// A single flag definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDef {
    pub key: FlagKey,
    pub kind: FlagKind,
    /// Human-readable description (for listings and warnings).
    pub description: String,
    /// Value used when the flag is absent.
    pub default: Option<String>,
}

impl FlagDef {
    pub fn new(key: FlagKey, kind: FlagKind) -> Self {
        Self {
            key,
            kind,
            description: String::new(),
            default: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Check if this definition names the given `--name` or `--name=...` argument.
    pub fn matches(&self, arg: &str) -> bool {
        flag_name(arg) == Some(self.key.as_str())
    }
}

/// One resolved registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub key: FlagKey,
    pub value: FlagValue,
    /// True when `value` came from the definition's default.
    pub defaulted: bool,
}

/// Result of reading a registry against an argument list.
#[derive(Debug, Clone, Default)]
pub struct RegistryReport {
    /// Entries in registry order.
    pub entries: Vec<RegistryEntry>,
    /// Warnings produced while reading (kind mismatches, unknown flags).
    pub warnings: Vec<String>,
}

impl RegistryReport {
    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.entries
            .iter()
            .find(|e| e.key.as_str() == key)
            .map(|e| &e.value)
    }
}

/// Serializes as an object of `key: value` pairs in registry order.
impl Serialize for RegistryReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.key.as_str(), &entry.value)?;
        }
        map.end()
    }
}

/// Read every definition in `registry` from `args`.
pub fn read_all<S: AsRef<str>>(args: &[S], registry: &[FlagDef]) -> RegistryReport {
    let mut entries = Vec::with_capacity(registry.len());
    let mut warnings = Vec::new();

    for def in registry {
        let mut value = read_flag(args, def.key.as_str());

        match (def.kind, &value) {
            (FlagKind::Switch, FlagValue::Value(_)) => {
                warnings.push(format!(
                    "{}: switch given a value, value ignored",
                    def.key.flag()
                ));
                value = FlagValue::Present;
            }
            (FlagKind::Valued, FlagValue::Present) => {
                warnings.push(format!("{}: missing value", def.key.flag()))
            }
            _ => {}
        }

        let mut defaulted = false;
        if value == FlagValue::Absent {
            if let Some(default) = &def.default {
                value = FlagValue::Value(default.clone());
                defaulted = true;
            }
        }

        entries.push(RegistryEntry {
            key: def.key.clone(),
            value,
            defaulted,
        });
    }

    let mut reported = HashSet::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some(name) = flag_name(arg) else {
            continue;
        };
        if !registry.iter().any(|def| def.matches(arg)) && reported.insert(name) {
            warnings.push(format!("--{}: unknown flag", name));
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }

    RegistryReport { entries, warnings }
}

/// Name of a `--name` or `--name=value` argument. `--` alone is not a flag.
fn flag_name(arg: &str) -> Option<&str> {
    let body = arg.strip_prefix("--")?;
    let name = match body.find('=') {
        Some(eq) => &body[..eq],
        None => body,
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
