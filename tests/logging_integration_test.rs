// Integration tests for logging functionality
// Installs the global subscriber, so it lives in its own test binary.

use std::fs;
use superdesk_settings::infrastructure::logging::{
    LogConfig, LogFormat, LoggerImpl, RotationPolicy,
};
use superdesk_settings::{load_settings, MapEnvironment};
use tempfile::TempDir;

#[test]
fn test_settings_load_is_logged_to_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        enable_stderr: false,
        rotation: RotationPolicy::Never,
    };

    let logger = temp_env::with_var_unset("RUST_LOG", || LoggerImpl::init(&config)).unwrap();

    let env = MapEnvironment::empty().with_var("LDAP_SERVER", "ldap://ad.ntb.no");
    load_settings(&env).unwrap();

    // Dropping the guard flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join("superdesk-settings.log")).unwrap();
    let line = contents
        .lines()
        .find(|l| l.contains("settings loaded"))
        .expect("load summary should be logged");

    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["auth_backend"], "ldap");
}
