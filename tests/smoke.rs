//! Smoke tests -- verify the binary runs and key subcommands exist.

use assert_cmd::Command;

#[test]
fn test_cli_help() {
    Command::cargo_bin("sleighwatch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "North Pole security operations console",
        ));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("sleighwatch")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("sleighwatch"));
}

#[test]
fn test_serve_subcommand_exists() {
    Command::cargo_bin("sleighwatch")
        .unwrap()
        .args(["serve", "--help"])
        .assert()
        .success();
}

#[test]
fn test_generate_prints_a_feed() {
    Command::cargo_bin("sleighwatch")
        .unwrap()
        .args(["generate", "--batches", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("SleighWatch Incident Feed"));
}

#[test]
fn test_generate_json_output_is_parseable() {
    let output = Command::cargo_bin("sleighwatch")
        .unwrap()
        .args(["generate", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let feed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let list = feed.as_array().unwrap();
    assert!((3..=5).contains(&list.len()));
    for inc in list {
        assert!(inc.get("analysis").is_none());
        assert!(inc.get("id").and_then(|v| v.as_str()).unwrap().starts_with("INC-"));
    }
}

#[test]
fn test_demo_requires_api_key() {
    Command::cargo_bin("sleighwatch")
        .unwrap()
        .args(["demo", "--batches", "1"])
        .env_remove("ANTHROPIC_API_KEY")
        .env("SLEIGHWATCH_CONFIG", "/nonexistent/sleighwatch.toml")
        .assert()
        .failure()
        .stderr(predicates::str::contains("requires an API key"));
}
