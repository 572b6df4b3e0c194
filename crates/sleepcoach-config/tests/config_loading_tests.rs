//! Config file loading tests

use sleepcoach_config::{
    AppConfig, ConfigError, InferenceProviderType, PromptLocale, ENV_API_TOKEN, ENV_PORT,
};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
        [server]
        host = "0.0.0.0"
        port = 9000

        [inference]
        provider = "ollama"
        model = "gemma3:12b"
        timeout_secs = 30

        [prompt]
        locale = "en"
        bedtime_hour = 22
        "#,
    );

    let config = AppConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.server.socket_addr().unwrap().to_string(), "0.0.0.0:9000");
    assert_eq!(config.inference.provider, InferenceProviderType::Ollama);
    assert_eq!(config.inference.model(), "gemma3:12b");
    assert_eq!(config.inference.timeout_secs, Some(30));
    assert_eq!(config.prompt.locale, PromptLocale::En);
    assert_eq!(config.prompt.bedtime_hour(), 22);
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("");
    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.inference.provider, InferenceProviderType::WorkersAi);
    assert_eq!(config.prompt.bedtime_hour(), 23);
    assert_eq!(config.server.port(), 8787);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = AppConfig::load(Some(std::path::Path::new("/nonexistent/sleepcoach.toml")))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_invalid_toml_reports_path() {
    let file = write_config("[server\nport = ");
    let err = AppConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_out_of_range_values_fail_validation() {
    let file = write_config("[prompt]\nbedtime_hour = 30\n");
    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = [(ENV_PORT, "9100"), (ENV_API_TOKEN, "tok")]
        .into_iter()
        .collect();

    let mut config = AppConfig::default();
    config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.server.port(), 9100);
    assert_eq!(config.inference.api_token.as_deref(), Some("tok"));
}

#[test]
fn test_bad_port_override_is_ignored() {
    let mut config = AppConfig::default();
    config.server.port = Some(8000);
    config.apply_env_overrides(|key| (key == ENV_PORT).then(|| "eighty".to_string()));

    assert_eq!(config.server.port(), 8000);
}
