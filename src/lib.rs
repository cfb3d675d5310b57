//! Read named command-line flags in boolean (`--key`) or value
//! (`--key=value`) form.

pub mod args;
pub mod config;
pub mod logging;

pub use args::{read_flag, FlagKey, FlagReader, FlagValue};
