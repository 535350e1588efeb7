//! End-to-end CLI tests using `assert_cmd`
#![cfg_attr(
    test,
    allow(
        dead_code,
        deprecated,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::tests_outside_test_module,
        reason = "Test allows"
    )
)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "VEHICLE": {
        "0x7CE1CCB9B293020E": {
            "name": "GET_VEHICLE_NUMBER_PLATE_TEXT",
            "params": [
                {"name": "vehicle", "type": "Vehicle"},
                {"name": "plate", "type": "char*"}
            ],
            "results": "void",
            "hash": "0x7CE1CCB9B293020E",
            "ns": "VEHICLE"
        },
        "0xAF35D0D2583051B0": {
            "name": "CREATE_VEHICLE",
            "params": [
                {"name": "modelHash", "type": "Hash"},
                {"name": "x", "type": "float"}
            ],
            "results": "Vehicle",
            "hash": "0xAF35D0D2583051B0",
            "ns": "VEHICLE"
        }
    },
    "CAM": {
        "0x865908C81A2C22E9": {
            "name": "DESTROY_CAM",
            "params": [{"name": "cam", "type": "Cam"}, {"name": "repeat", "type": "BOOL"}],
            "results": "void",
            "hash": "0x865908C81A2C22E9",
            "ns": "CAM",
            "aliases": ["_DESTROY_CAMERA"]
        }
    }
}"#;

/// Helper to get cargo binary or fail test
fn cargo_bin() -> Command {
    Command::cargo_bin("natdoc").unwrap_or_else(|err| panic!("Binary not found: {err}"))
}

/// Helper to create temp dir or fail test
fn temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|err| panic!("Failed to create temp dir: {err}"))
}

fn write_catalog(dir: &Path) {
    fs::write(dir.join("natives.json"), CATALOG)
        .unwrap_or_else(|err| panic!("Failed to write catalog: {err}"));
}

#[test]
fn test_cli_help() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_invalid_command() {
    cargo_bin().arg("invalid-command-xyz").assert().failure();
}

#[test]
fn test_generate_writes_namespace_files() {
    let temp = temp_dir();
    write_catalog(temp.path());

    cargo_bin()
        .current_dir(temp.path())
        .args(["generate", "--input", "natives.json", "--output", "lua"])
        .assert()
        .success();

    let vehicle = fs::read_to_string(temp.path().join("lua/VEHICLE.lua"))
        .unwrap_or_else(|err| panic!("VEHICLE.lua missing: {err}"));
    assert!(vehicle.starts_with("---@meta\n\n---**`VEHICLE` `client`**  \n"));
    assert!(
        vehicle.find("function CreateVehicle(modelHash, x) end").unwrap()
            < vehicle
                .find("function GetVehicleNumberPlateText(vehicle, plate) end")
                .unwrap()
    );
    assert!(vehicle.contains("---@param plate string\nfunction GetVehicleNumberPlateText"));

    let cam = fs::read_to_string(temp.path().join("lua/CAM.lua"))
        .unwrap_or_else(|err| panic!("CAM.lua missing: {err}"));
    assert!(cam.contains("---@param _repeat boolean\nfunction DestroyCam(cam, _repeat) end\n"));
    assert!(cam.contains("\n---@deprecated\nDestroyCamera = DestroyCam\n\n"));
}

#[test]
fn test_generate_uses_config_file() {
    let temp = temp_dir();
    write_catalog(temp.path());
    fs::write(
        temp.path().join("natdoc.toml"),
        "output_dir = \"stubs\"\ndoc_url_prefix = \"https://example.test/n/\"\ndefault_apiset = \"server\"\n",
    )
    .unwrap_or_else(|err| panic!("Failed to write config: {err}"));

    cargo_bin()
        .current_dir(temp.path())
        .args(["generate", "-i", "natives.json"])
        .assert()
        .success();

    let cam = fs::read_to_string(temp.path().join("stubs/CAM.lua"))
        .unwrap_or_else(|err| panic!("CAM.lua missing: {err}"));
    assert!(cam.contains("---**`CAM` `server`**  \n---[Native Documentation](https://example.test/n/0x865908C81A2C22E9)  \n"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = temp_dir();
    write_catalog(temp.path());

    cargo_bin()
        .current_dir(temp.path())
        .args(["generate", "-i", "natives.json", "-o", "lua", "--dry-run"])
        .assert()
        .success();

    assert!(!temp.path().join("lua").exists());
}

#[test]
fn test_generate_fails_without_loadable_catalog() {
    let temp = temp_dir();

    cargo_bin()
        .current_dir(temp.path())
        .args(["generate", "-i", "missing.json", "-o", "lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No catalog could be loaded"));
}

#[test]
fn test_config_prints_defaults_and_init_writes_file() {
    let temp = temp_dir();

    cargo_bin()
        .current_dir(temp.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://docs.fivem.net/natives/?_"))
        .stdout(predicate::str::contains("DeleteEntity"));

    let written = fs::read_to_string(temp.path().join("natdoc.toml"))
        .unwrap_or_else(|err| panic!("natdoc.toml missing: {err}"));
    assert!(written.starts_with("# natdoc configuration"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp = temp_dir();
    fs::write(temp.path().join("natdoc.toml"), "default_apiset = \"\"\n")
        .unwrap_or_else(|err| panic!("Failed to write config: {err}"));

    cargo_bin()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_apiset must not be empty"));
}
