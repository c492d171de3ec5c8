//! Tests for locating caller options on disk.

use packsmith_config::discovery::load_file;
use packsmith_config::{InputDiscovery, InputSource};
use std::fs;
use tempfile::TempDir;

#[test]
fn config_file_wins_over_package_json() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "site", "packsmith": { "useHttps": true } }"#,
    )
    .expect("write package.json");
    fs::write(
        dir.path().join("packsmith.config.json"),
        r#"{ "useHttps": false }"#,
    )
    .expect("write config");

    let discovery = InputDiscovery::new(dir.path());
    assert_eq!(
        discovery.find().unwrap(),
        Some(InputSource::ConfigFile(dir.path().join("packsmith.config.json")))
    );
    assert!(!discovery.load().unwrap().use_https);
}

#[test]
fn package_json_field_is_used() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "site",
            "packsmith": {
                "entries": {
                    "zeta": "./scripts/zeta.js",
                    "alpha": "./styles/alpha.scss"
                }
            }
        }"#,
    )
    .expect("write package.json");

    let options = InputDiscovery::new(dir.path()).load().unwrap();
    let keys: Vec<_> = options.entries.unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn invalid_config_json_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("packsmith.config.json"), "{ not json").expect("write config");
    let result = InputDiscovery::new(dir.path()).load();
    assert!(matches!(
        result,
        Err(packsmith_config::ConfigError::InvalidValue(_))
    ));
}

#[test]
fn malformed_package_json_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{"name":"site","packsmith":{"entries":{"a":"./a.txt"}},}"#,
    )
    .expect("write package.json");

    let discovery = InputDiscovery::new(dir.path());
    assert!(matches!(
        discovery.load(),
        Err(packsmith_config::ConfigError::InvalidPackage { .. })
    ));
    assert!(discovery.load_value().is_err());
}

#[test]
fn load_file_reads_package_field() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("package.json");
    fs::write(&path, r#"{ "packsmith": { "useHttps": false } }"#).expect("write package.json");
    let value = load_file(&path).unwrap();
    assert_eq!(value, serde_json::json!({ "useHttps": false }));
}

#[test]
fn load_file_reports_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    let result = load_file(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(packsmith_config::ConfigError::Io(_))));
}
