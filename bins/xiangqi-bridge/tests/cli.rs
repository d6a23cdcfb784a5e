//! End-to-end tests for the xiangqi-bridge CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Write a config that pins all three directories inside `root`, so tests
/// never touch the real platform directories.
fn write_config(root: &Path) -> std::path::PathBuf {
    let config_path = root.join("xiangqi-bridge.toml");
    let body = format!(
        r#"
[dirs]
native_library_dir = "{root}/lib"
code_cache_dir = "{root}/code_cache"
files_dir = "{root}/files"
"#,
        root = root.display()
    );
    std::fs::write(&config_path, body).unwrap();
    config_path
}

fn bridge() -> Command {
    let mut cmd = Command::cargo_bin("xiangqi-bridge").unwrap();
    cmd.env_remove("XIANGQI_NATIVE_LIB_DIR")
        .env_remove("XIANGQI_CODE_CACHE_DIR")
        .env_remove("XIANGQI_FILES_DIR");
    cmd
}

#[test]
fn query_files_dir_prints_resolved_path() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path());

    bridge()
        .args(["--config", config.to_str().unwrap(), "query", "getFilesDir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("files"));
}

#[test]
fn query_unknown_method_is_not_implemented() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path());

    bridge()
        .args([
            "--config",
            config.to_str().unwrap(),
            "query",
            "deleteEverything",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn query_json_reports_outcome() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path());

    let output = bridge()
        .args([
            "--config",
            config.to_str().unwrap(),
            "query",
            "getCodeCacheDir",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["outcome"], "success");
    assert!(body["value"].as_str().unwrap().contains("code_cache"));
}

#[test]
fn methods_lists_the_supported_names() {
    bridge()
        .arg("methods")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("getNativeLibraryDir")
                .and(predicate::str::contains("getCodeCacheDir"))
                .and(predicate::str::contains("getFilesDir")),
        );
}

#[test]
fn dirs_json_uses_the_configured_overrides() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path());

    let output = bridge()
        .args(["--config", config.to_str().unwrap(), "dirs", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(body["files_dir"].as_str().unwrap().ends_with("files"));
    assert!(body["code_cache_dir"]
        .as_str()
        .unwrap()
        .ends_with("code_cache"));
}

#[test]
fn doctor_succeeds_with_materialized_dirs() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path());
    // The native-library dir is only validated, never created
    std::fs::create_dir_all(tmp.path().join("lib")).unwrap();

    bridge()
        .args(["--config", config.to_str().unwrap(), "doctor"])
        .assert()
        .success();
}

#[test]
fn missing_config_file_is_a_config_error() {
    bridge()
        .args(["--config", "/nonexistent/xiangqi-bridge.toml", "methods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
