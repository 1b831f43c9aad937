use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::unset("PP_API_URL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.api.request_timeout_secs, 30);
    assert!(config.logging.file.is_none());
    assert!(config.logging.colored);
}

#[test]
#[serial]
fn given_config_toml_when_load_then_values_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _url = EnvGuard::unset("PP_API_URL");
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[api]
base_url = "https://profiles.example.com"
request_timeout_secs = 5

[logging]
level = "debug"
colored = false
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.base_url, "https://profiles.example.com");
    assert_eq!(config.api.request_timeout_secs, 5);
    assert_eq!(config.logging.level.0, log::LevelFilter::Debug);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_env_override_when_load_then_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[api]
base_url = "https://from-file.example.com"
"#,
    )
    .unwrap();
    let _url = EnvGuard::set("PP_API_URL", "https://from-env.example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.base_url, "https://from-env.example.com");
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "api = not valid toml").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_default_config_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::unset("PP_API_URL");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_bad_base_url_env_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("PP_API_URL", "ftp://profiles.example.com");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
