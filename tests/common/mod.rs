//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Turn string literals into an owned argument list.
pub fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config declaring the dev-server flags used across the CLI tests.
pub const DEV_SERVER_CONFIG: &str = r#"
[output]
format = "plain"

[[flags]]
key = "watch"
kind = "switch"
description = "Rebuild on change"

[[flags]]
key = "port"
kind = "valued"
description = "Dev server port"
default = "7000"

[[flags]]
key = "mode"
"#;

/// The flagread binary, with logging and any user config kept out of the way.
pub fn flagread_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flagread"));
    cmd.env_remove("FLAGREAD_LOG");
    cmd
}
