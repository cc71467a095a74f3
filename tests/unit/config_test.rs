//! Tests for configuration loading and saving

use std::fs;

use tempfile::TempDir;
use zabbixctl::config::Config;

#[test]
fn parse_full_config() {
    let config = Config::parse(
        r#"
[server]
address = "https://zabbix.example.com"
username = "oncall"
password = "secret"
timeout_secs = 5

[acknowledge]
message = "on it"
"#,
    )
    .unwrap();

    assert_eq!(config.server.address, "https://zabbix.example.com");
    assert_eq!(config.server.username, "oncall");
    assert_eq!(config.server.password, "secret");
    assert_eq!(config.server.timeout_secs, 5);
    assert_eq!(config.acknowledge.message, "on it");
}

#[test]
fn defaults_fill_missing_fields() {
    let config = Config::parse("[server]\naddress = \"http://localhost\"\n").unwrap();

    assert_eq!(config.server.timeout_secs, 30);
    assert_eq!(config.acknowledge.message, "Acknowledged via zabbixctl");
    assert!(config.server.username.is_empty());
}

#[test]
fn missing_address_is_rejected() {
    let err = Config::parse("[server]\nusername = \"oncall\"\n").unwrap_err();
    assert!(err.to_string().contains("server.address"));
}

#[test]
fn malformed_toml_is_rejected() {
    assert!(Config::parse("[server\naddress = ").is_err());
}

#[test]
fn load_missing_file_names_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/config.toml");

    let config = Config::template();
    config.save(&path).unwrap();

    assert!(fs::read_to_string(&path).unwrap().contains("[server]"));
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn explicit_path_wins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");

    assert_eq!(Config::resolve_path(Some(&path)).unwrap(), path);
}
