use bloom::config::Config;
use bloom::nav::Screen;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.startup.start_screen = Screen::Login;
    config.ui.tick_rate_ms = 100;
    config.logging.level = "debug".to_string();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn test_invalid_file_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[startup]\nstart_screen = 7\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_hand_written_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[startup]
start_screen = "Home"

[logging]
enabled = false
file = "/var/tmp/bloom.log"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.startup.start_screen, Screen::Home);
    assert!(!config.logging.enabled);
    assert_eq!(config.log_path().unwrap().to_str(), Some("/var/tmp/bloom.log"));
    assert_eq!(config.ui.tick_rate_ms, 250);
}
