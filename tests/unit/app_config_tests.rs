/*!
 * Tests for application configuration functionality
 */

use doctrans::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.service.endpoint, "https://api.deepl.com/v2/document");
    assert!(config.service.api_key.is_empty());
    assert_eq!(config.translation.target_language, "FR");
    assert_eq!(config.folders.input_folder, "input");
    assert_eq!(config.folders.output_folder, "output");
    assert_eq!(config.polling.interval_secs, 5);
    assert_eq!(config.polling.max_attempts, 60);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Default config has no API key, so it must not validate
    let mut config = Config::default();
    assert!(config.validate().is_err());

    // With an API key the defaults are valid
    config.service.api_key = "test-key".to_string();
    assert!(config.validate().is_ok());

    // Empty endpoint
    config.service.endpoint = String::new();
    assert!(config.validate().is_err());

    // Endpoint that is not a URL
    config.service.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.service.endpoint = "https://api.deepl.com/v2/document".to_string();
    assert!(config.validate().is_ok());

    // Empty target language
    config.translation.target_language = String::new();
    assert!(config.validate().is_err());
    config.translation.target_language = "DE".to_string();
    assert!(config.validate().is_ok());

    // Zero poll attempts would never observe any status
    config.polling.max_attempts = 0;
    assert!(config.validate().is_err());
}

/// Test that a partial config file is filled in with defaults
#[test]
fn test_config_parsing_withPartialJson_shouldFillDefaults() {
    let json = r#"{
        "service": { "api_key": "abc123" },
        "translation": { "target_language": "ES" }
    }"#;

    let config: Config = serde_json::from_str(json).expect("Partial config should parse");

    assert_eq!(config.service.api_key, "abc123");
    assert_eq!(config.service.endpoint, "https://api.deepl.com/v2/document");
    assert_eq!(config.translation.target_language, "ES");
    assert_eq!(config.folders.input_folder, "input");
    assert_eq!(config.polling.interval_secs, 5);
    assert!(config.validate().is_ok());
}

/// Test that a config survives a serialize/deserialize cycle
#[test]
fn test_config_serialization_withCustomValues_shouldRoundTrip() {
    let mut config = Config::default();
    config.service.api_key = "secret".to_string();
    config.polling.interval_secs = 2;
    config.polling.max_attempts = 10;
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string(&config).expect("Config should serialize");
    let parsed: Config = serde_json::from_str(&json).expect("Config should deserialize");

    assert_eq!(parsed.service.api_key, "secret");
    assert_eq!(parsed.polling.interval_secs, 2);
    assert_eq!(parsed.polling.max_attempts, 10);
    assert_eq!(parsed.log_level, LogLevel::Debug);
}
