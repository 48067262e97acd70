#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn navmenu_cmd() -> Command {
    Command::cargo_bin("navmenu").expect("binary should be built")
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command should run");
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

#[test]
fn valid_config_exits_0() {
    navmenu_cmd()
        .arg(fixtures_dir().join("clinician.json"))
        .arg("--location")
        .arg("/Patient/123")
        .assert()
        .code(0);
}

#[test]
fn no_config_exits_0_with_default_menu() {
    let parsed = json_output(navmenu_cmd().arg("--location").arg("/Observation"));

    let menus = parsed["menus"].as_array().unwrap();
    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0]["title"], "Edit Configuration Page");
    assert_eq!(menus[1]["title"], "Settings");
    assert_eq!(
        menus[0]["links"][0]["href"],
        "/UserConfiguration/new?bookmark=/Observation"
    );
    assert!(parsed["input"].is_null());
}

#[test]
fn json_output_has_report_fields() {
    let parsed = json_output(navmenu_cmd().arg(fixtures_dir().join("clinician.json")));

    assert_eq!(parsed["schema_version"], "0.1.0");
    assert!(parsed.get("tool").is_some());
    assert!(parsed.get("input").is_some());
    assert!(parsed.get("location").is_some());
    assert!(parsed.get("menus").is_some());
    assert_eq!(parsed["input"]["hash"]["algorithm"], "sha256");
}

#[test]
fn json_menus_follow_configuration_order() {
    let parsed = json_output(
        navmenu_cmd()
            .arg(fixtures_dir().join("clinician.json"))
            .arg("--location")
            .arg("/Patient/123"),
    );

    let titles: Vec<&str> = parsed["menus"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Edit Configuration Page", "Favorites", "Admin", "Settings"]
    );

    assert_eq!(
        parsed["menus"][0]["links"][0]["href"],
        "/UserConfiguration/42/edit?bookmark=/Patient/123"
    );
    assert_eq!(
        parsed["menus"][1]["links"][0]["icon"],
        serde_json::json!({ "kind": "glyph", "name": "star" })
    );
    assert_eq!(
        parsed["menus"][2]["links"][2]["icon"],
        serde_json::json!({ "kind": "blank", "width": 30 })
    );
}

#[test]
fn text_output_lists_sections() {
    navmenu_cmd()
        .arg(fixtures_dir().join("no_id.json"))
        .arg("--format")
        .arg("text")
        .arg("--location")
        .arg("/Questionnaire")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Links"))
        .stdout(predicate::str::contains("[forms] Forms -> /Questionnaire"))
        .stdout(predicate::str::contains(
            "[plus] Bookmark Page -> /UserConfiguration/new?bookmark=/Questionnaire",
        ))
        .stdout(predicate::str::contains("[lock] Security -> /security"));
}

#[test]
fn out_flag_writes_file() {
    let out = NamedTempFile::new().unwrap();

    navmenu_cmd()
        .arg(fixtures_dir().join("empty.json"))
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(out.path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["input"]["configuration_id"], "empty-1");
}

#[test]
fn commit_flag_is_reported() {
    let parsed = json_output(navmenu_cmd().arg("--commit").arg("abc123"));
    assert_eq!(parsed["tool"]["commit"], "abc123");
    assert_eq!(parsed["tool"]["name"], "navmenu-cli");
}

#[test]
fn wrong_resource_type_fails() {
    navmenu_cmd()
        .arg(fixtures_dir().join("wrong_type.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("UserConfiguration"));
}

#[test]
fn missing_config_fails() {
    navmenu_cmd()
        .arg(fixtures_dir().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read configuration"));
}

#[test]
fn invalid_location_fails() {
    navmenu_cmd()
        .arg("--location")
        .arg("http://host:99999/")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid location"));
}

#[test]
fn output_is_deterministic() {
    let run = || {
        navmenu_cmd()
            .arg(fixtures_dir().join("clinician.json"))
            .arg("--location")
            .arg("/Patient/1")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
