//! Integration tests for the zabbixctl CLI
//!
//! These run the real binary. Backend calls go to a mock JSON-RPC server, or
//! to an unreachable address where a test proves no call happens.

use assert_cmd::cargo;
use mockito::{Matcher, Mock, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a zabbixctl command
fn zabbixctl() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("zabbixctl"))
}

/// Helper to write a config file pointing at `address`
fn write_config(dir: &Path, address: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(
        &path,
        format!(
            "[server]\naddress = \"{address}\"\nusername = \"oncall\"\npassword = \"secret\"\ntimeout_secs = 5\n"
        ),
    )
    .unwrap();
    path
}

/// Helper to serve a login and two firing triggers; keep the mocks alive
fn mock_backend(server: &mut mockito::ServerGuard) -> Vec<Mock> {
    let login = server
        .mock("POST", "/api_jsonrpc.php")
        .match_body(Matcher::PartialJson(json!({"method": "user.login"})))
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "token"}).to_string())
        .create();
    let triggers = server
        .mock("POST", "/api_jsonrpc.php")
        .match_body(Matcher::PartialJson(json!({"method": "trigger.get"})))
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "result": [
                    {
                        "triggerid": "1",
                        "description": "Disk full",
                        "priority": "4",
                        "value": "1",
                        "lastchange": "1700000000",
                        "hosts": [{"host": "db1"}],
                        "lastEvent": {"eventid": "901", "acknowledged": "0", "clock": "1700000000"}
                    },
                    {
                        "triggerid": "2",
                        "description": "Nginx down",
                        "priority": "5",
                        "value": "1",
                        "lastchange": "1700000100",
                        "hosts": [{"host": "web1"}],
                        "lastEvent": {"eventid": "902", "acknowledged": "0", "clock": "1700000100"}
                    }
                ]
            })
            .to_string(),
        )
        .create();

    vec![login, triggers]
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    zabbixctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zabbixctl"));
}

#[test]
fn test_help_lists_triggers_command() {
    zabbixctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("triggers"));
}

#[test]
fn test_triggers_help_lists_options() {
    zabbixctl()
        .args(["triggers", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--noconfirm"))
        .stdout(predicate::str::contains("--only-nack"))
        .stdout(predicate::str::contains("--until"));
}

#[test]
fn test_severity_out_of_range_is_rejected() {
    zabbixctl().args(["triggers", "--severity", "9"]).assert().failure();
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("zabbixctl/config.toml");

    zabbixctl()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(fs::read_to_string(&path).unwrap().contains("address"));

    zabbixctl()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

// =============================================================================
// TRIGGERS
// =============================================================================

#[test]
fn test_literal_word_is_usage_error_without_network() {
    let temp = TempDir::new().unwrap();
    // Port 9 (discard) is not expected to answer; the error must come first
    let config = write_config(temp.path(), "http://127.0.0.1:9");

    zabbixctl()
        .arg("--config")
        .arg(&config)
        .args(["triggers", "--acknowledge", "db1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected command line token 'db1'"))
        .stderr(predicate::str::contains("use '/db1'"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    zabbixctl()
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg("triggers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't read config file"));
}

#[test]
fn test_unreachable_backend_reports_context() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "http://127.0.0.1:9");

    zabbixctl()
        .arg("--config")
        .arg(&config)
        .arg("triggers")
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't obtain triggers"));
}

#[test]
fn test_lists_and_filters_triggers() {
    let mut server = Server::new();
    let _backend = mock_backend(&mut server);
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), &server.url());

    zabbixctl()
        .arg("--config")
        .arg(&config)
        .args(["t", "/web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("902"))
        .stdout(predicate::str::contains("Nginx down"))
        .stdout(predicate::str::contains("db1").not());
}

#[test]
fn test_declined_acknowledge_sends_nothing() {
    let mut server = Server::new();
    let _backend = mock_backend(&mut server);
    let ack = server
        .mock("POST", "/api_jsonrpc.php")
        .match_body(Matcher::PartialJson(json!({"method": "event.acknowledge"})))
        .with_body(json!({"jsonrpc": "2.0", "id": 3, "result": {}}).to_string())
        .expect(0)
        .create();
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), &server.url());

    zabbixctl()
        .arg("--config")
        .arg(&config)
        .args(["triggers", "-k"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Proceed with acknowledge?"));

    ack.assert();
}

#[test]
fn test_confirmed_acknowledge() {
    let mut server = Server::new();
    let _backend = mock_backend(&mut server);
    let ack = server
        .mock("POST", "/api_jsonrpc.php")
        .match_body(Matcher::PartialJson(json!({
            "method": "event.acknowledge",
            "params": {"eventids": ["901"]}
        })))
        .with_body(json!({"jsonrpc": "2.0", "id": 3, "result": {"eventids": [901]}}).to_string())
        .expect(1)
        .create();
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), &server.url());

    zabbixctl()
        .arg("--config")
        .arg(&config)
        .args(["triggers", "--acknowledge", "/db1"])
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Acknowledged"));

    ack.assert();
}

#[test]
fn test_json_output() {
    let mut server = Server::new();
    let _backend = mock_backend(&mut server);
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), &server.url());

    let output = zabbixctl()
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .arg("triggers")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_relative_since_with_leading_dash() {
    let mut server = Server::new();
    let _login = server
        .mock("POST", "/api_jsonrpc.php")
        .match_body(Matcher::PartialJson(json!({"method": "user.login"})))
        .with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "token"}).to_string())
        .create();
    let triggers = server
        .mock("POST", "/api_jsonrpc.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"method": "trigger.get"})),
            Matcher::Regex(r#""lastChangeSince":\d+"#.to_string()),
        ]))
        .with_body(json!({"jsonrpc": "2.0", "id": 2, "result": []}).to_string())
        .expect(1)
        .create();
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), &server.url());

    zabbixctl()
        .arg("--config")
        .arg(&config)
        .args(["triggers", "--since", "-30m"])
        .assert()
        .success();

    triggers.assert();
}
