//! Flag reading for flagread.
//!
//! ```text
//! Argument list → read_flag(key) → FlagValue
//!              ↘ read_all(registry) → RegistryReport
//! ```
//!
//! Every stage is a pure function over its inputs.

mod key;
mod reader;
mod registry;
mod value;

pub use key::{FlagKey, FlagKeyError};
pub use reader::{read_flag, FlagReader};
pub use registry::{read_all, FlagDef, FlagKind, RegistryEntry, RegistryReport};
pub use value::FlagValue;
