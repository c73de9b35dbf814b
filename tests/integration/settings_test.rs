//! Configuration Persistence Integration Tests

use taskdeck::{AppConfig, ConfigService, SettingsUpdate};

#[test]
fn test_config_file_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");

    let mut service = ConfigService::at_path(path.clone()).unwrap();
    service
        .update_config(SettingsUpdate {
            api_url: Some("http://tasks.internal:9000".to_string()),
            request_timeout_secs: Some(5),
            debug_mode: Some(true),
        })
        .unwrap();

    let reloaded = ConfigService::at_path(path).unwrap();
    let config = reloaded.get_config();
    assert_eq!(config.api_url, "http://tasks.internal:9000");
    assert_eq!(config.request_timeout_secs, 5);
    assert!(config.debug_mode);
}

#[test]
fn test_first_run_writes_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");

    let service = ConfigService::at_path(path.clone()).unwrap();
    assert!(path.exists());
    assert_eq!(service.get_config().api_url, AppConfig::default().api_url);
}

#[test]
fn test_invalid_update_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");

    let mut service = ConfigService::at_path(path).unwrap();
    assert!(service
        .update_config(SettingsUpdate {
            request_timeout_secs: Some(0),
            ..SettingsUpdate::default()
        })
        .is_err());
}
