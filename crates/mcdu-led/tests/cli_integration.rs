//! Integration tests for the `mcdu-led` binary.
//!
//! These run the binary via `assert_cmd` against its simulated panel and check
//! exit status and output for accepted and rejected requests.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mcdu-led");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a config file into a fresh temp dir and return both.
fn config_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mcdu-led"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── LED requests ──

#[test]
fn cli_set_lowercase_name_succeeds() {
    cli()
        .args(["set", "fail", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAIL").and(predicate::str::contains("200")));
}

#[test]
fn cli_set_json_reports_panel() {
    let output = cli()
        .args(["--json", "set", "Rdy", "17"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["applied"], true);
    let rdy = json["leds"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["name"] == "RDY")
        .unwrap();
    assert_eq!(rdy["level"], 17);
}

#[test]
fn cli_set_unknown_led_fails() {
    cli()
        .args(["set", "UNKNOWN", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown LED: UNKNOWN"));
}

#[test]
fn cli_set_out_of_range_fails() {
    cli()
        .args(["set", "RDY", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn cli_set_negative_fails_as_out_of_range() {
    cli()
        .args(["set", "RDY", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn cli_set_non_numeric_fails() {
    cli()
        .args(["set", "RDY", "bright"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn cli_on_off_succeed() {
    cli().args(["on", "mcdu"]).assert().success();
    cli().args(["off", "MCDU"]).assert().success();
}

#[test]
fn cli_set_all_and_shorthands_succeed() {
    cli().args(["set-all", "50"]).assert().success();
    cli().arg("all-on").assert().success();
    cli().arg("all-off").assert().success();
}

#[test]
fn cli_all_on_json_lights_every_led() {
    let output = cli()
        .args(["--json", "all-on"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let leds = json["leds"].as_array().unwrap();
    assert_eq!(leds.len(), 11);
    assert!(leds.iter().all(|l| l["level"] == 255));
}

// ── Listings ──

#[test]
fn cli_leds_lists_names() {
    cli()
        .arg("leds")
        .assert()
        .success()
        .stdout(predicate::str::contains("SCREEN_BACKLIGHT").and(predicate::str::contains("FM2")));
}

#[test]
fn cli_leds_json_has_eleven() {
    let output = cli()
        .args(["--json", "leds"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["count"], 11);
}

// ── Config ──

#[test]
fn cli_config_json_produces_valid_json() {
    let (_dir, path) = config_file("log_level = \"info\"\n[levels]\nFAIL = 0\n");
    let output = cli()
        .args(["--json", "--config"])
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert_eq!(json["config_file_exists"], true);
    assert_eq!(json["settings"]["log_level"], "info");
    assert_eq!(json["settings"]["levels"]["FAIL"], 0);
    assert!(json["problems"].as_array().unwrap().is_empty());
}

#[test]
fn cli_config_reports_problems() {
    let (_dir, path) = config_file("[levels]\nLAMP = 1\n");
    cli()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown LED in levels: LAMP"));
}

#[test]
fn cli_apply_configured_levels() {
    let (_dir, path) = config_file("[levels]\nBACKLIGHT = 128\nfm1 = \"32\"\n");
    cli()
        .arg("--config")
        .arg(&path)
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("128").and(predicate::str::contains("32")));
}

#[test]
fn cli_apply_with_rejected_level_fails() {
    let (_dir, path) = config_file("[levels]\nBACKLIGHT = 128\nRDY = 999\n");
    cli()
        .arg("--config")
        .arg(&path)
        .arg("apply")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2"));
}

#[test]
fn cli_malformed_config_falls_back_to_defaults() {
    let (_dir, path) = config_file("this is { not valid toml");
    cli()
        .arg("--config")
        .arg(&path)
        .arg("leds")
        .assert()
        .success()
        .stderr(predicate::str::contains("config parse error"));
}

// ── --verbose flag ──

#[test]
fn cli_verbose_flag_accepted() {
    cli().args(["-v", "leds"]).assert().success();
}

#[test]
fn cli_verbose_logs_forwarded_request() {
    cli()
        .args(["--verbose", "on", "fail"])
        .assert()
        .success()
        .stderr(predicate::str::contains("LED FAIL set to 255"));
}

// ── Logged rejections ──

#[test]
fn cli_unknown_led_logs_warning() {
    cli()
        .args(["set", "UNKNOWN", "100"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Invalid LED name: UNKNOWN")
                .and(predicate::str::contains("Valid LEDs: BACKLIGHT")),
        );
}

#[test]
fn cli_padded_led_name_is_rejected() {
    cli()
        .args(["on", " fail "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid LED name:  fail "));
}

#[test]
fn cli_bad_brightness_logs_warning() {
    cli()
        .args(["set", "RDY", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid brightness for RDY"));
    cli()
        .args(["set-all", "dim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid brightness for all LEDs"));
}

#[test]
fn cli_huge_brightness_is_out_of_range() {
    let huge = format!("1{}", "0".repeat(42));
    cli()
        .args(["set", "RDY", huge.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn cli_quiet_config_suppresses_warning() {
    let (_dir, path) = config_file("log_level = \"off\"\n");
    cli()
        .arg("--config")
        .arg(&path)
        .args(["set", "UNKNOWN", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid LED name").not());
}

// ── Presets ──

#[test]
fn cli_preset_then_apply() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli()
        .arg("--config")
        .arg(&path)
        .args(["preset", "fail", "77"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preset FAIL = 77"));

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("FAIL = 77"));

    let output = cli()
        .args(["--json", "--config"])
        .arg(&path)
        .arg("apply")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let fail = json["leds"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["name"] == "FAIL")
        .unwrap();
    assert_eq!(fail["level"], 77);

    cli()
        .arg("--config")
        .arg(&path)
        .args(["preset", "FAIL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed preset for FAIL"));
}

#[test]
fn cli_preset_rejects_unknown_led() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli()
        .arg("--config")
        .arg(&path)
        .args(["preset", "LAMP", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error: Unknown LED: LAMP"));
    assert!(!path.exists());
}

#[test]
fn cli_config_check_fails_on_problems() {
    let (_dir, path) = config_file("[levels]\nLAMP = 1\n");
    cli()
        .arg("--config")
        .arg(&path)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 problem found"));
}
