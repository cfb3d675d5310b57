//! Integration tests for reading a flag registry.

mod common;

use common::raw_args;
use flagread::args::{read_all, FlagDef, FlagKey, FlagKind, FlagValue};

fn def(key: &str, kind: FlagKind) -> FlagDef {
    FlagDef::new(FlagKey::parse(key).unwrap(), kind)
}

fn dev_registry() -> Vec<FlagDef> {
    vec![
        def("watch", FlagKind::Switch).with_description("Rebuild on change"),
        def("port", FlagKind::Valued).with_default("7000"),
        def("mode", FlagKind::Any),
    ]
}

#[test]
fn reads_every_declared_flag_in_order() {
    let args = raw_args(&["node", "build.js", "--watch", "--mode=production"]);
    let report = read_all(&args, &dev_registry());

    let keys: Vec<&str> = report.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["watch", "port", "mode"]);

    assert_eq!(report.get("watch"), Some(&FlagValue::Present));
    assert_eq!(report.get("port"), Some(&FlagValue::from("7000")));
    assert_eq!(report.get("mode"), Some(&FlagValue::from("production")));
    assert!(report.warnings.is_empty());
}

#[test]
fn switch_given_value_warns() {
    let args = raw_args(&["--watch=yes"]);
    let report = read_all(&args, &dev_registry());

    assert_eq!(report.get("watch"), Some(&FlagValue::Present));
    assert!(report
        .warnings
        .iter()
        .any(|w| w == "--watch: switch given a value, value ignored"));
}

#[test]
fn valued_without_value_warns() {
    let args = raw_args(&["--port"]);
    let report = read_all(&args, &dev_registry());

    assert_eq!(report.get("port"), Some(&FlagValue::Present));
    assert!(!report.entries[1].defaulted);
    assert!(report.warnings.iter().any(|w| w == "--port: missing value"));
}

#[test]
fn unknown_flags_warn() {
    let args = raw_args(&[
        "--typo-flag",
        "--other=1",
        "--",
        "-v",
        "positional",
        "--typo-flag",
        "--other=2",
    ]);
    let report = read_all(&args, &dev_registry());

    assert_eq!(
        report.warnings,
        vec![
            "--typo-flag: unknown flag".to_string(),
            "--other: unknown flag".to_string(),
        ]
    );
}

#[test]
fn empty_registry_reports_nothing_but_unknowns() {
    let args = raw_args(&["--port=1"]);
    let report = read_all(&args, &[]);

    assert!(report.entries.is_empty());
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn report_json_keeps_registry_order() {
    let args = raw_args(&["--mode=", "--watch"]);
    let report = read_all(&args, &dev_registry());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["watch"], serde_json::json!(true));
    assert_eq!(json["port"], serde_json::json!("7000"));
    assert_eq!(json["mode"], serde_json::json!(""));
}
