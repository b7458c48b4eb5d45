use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Remote document translation service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Input/output folder settings
    #[serde(default)]
    pub folders: FolderConfig,

    /// Status polling settings
    #[serde(default)]
    pub polling: PollingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Remote service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Document API endpoint base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API authentication key
    #[serde(default = "String::new")]
    pub api_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
        }
    }
}

/// Translation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Target language code (e.g. "FR", "DE"); valid values are defined
    /// by the service, not checked locally
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
        }
    }
}

/// Input and output folder configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FolderConfig {
    /// Directory scanned (non-recursively) for PDF files to translate
    #[serde(default = "default_input_folder")]
    pub input_folder: String,

    /// Directory where translated files are written; created if missing
    #[serde(default = "default_output_folder")]
    pub output_folder: String,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            input_folder: default_input_folder(),
            output_folder: default_output_folder(),
        }
    }
}

/// Status polling configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PollingConfig {
    /// Delay between consecutive status checks, in seconds
    #[serde(default = "default_poll_interval_secs")]
    pub interval_secs: u64,

    /// Maximum number of status checks per document before the file is
    /// abandoned; bounds the otherwise open-ended wait on the service
    #[serde(default = "default_max_poll_attempts")]
    pub max_attempts: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval_secs(),
            max_attempts: default_max_poll_attempts(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://api.deepl.com/v2/document".to_string()
}

fn default_target_language() -> String {
    "FR".to_string()
}

fn default_input_folder() -> String {
    "input".to_string()
}

fn default_output_folder() -> String {
    "output".to_string()
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_max_poll_attempts() -> u32 {
    60
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.service.endpoint.is_empty() {
            return Err(anyhow!("Service endpoint URL is required"));
        }

        Url::parse(&self.service.endpoint)
            .map_err(|e| anyhow!("Invalid service endpoint URL '{}': {}", self.service.endpoint, e))?;

        if self.service.api_key.is_empty() {
            return Err(anyhow!("Service API key is required"));
        }

        if self.translation.target_language.is_empty() {
            return Err(anyhow!("Target language code is required"));
        }

        if self.polling.max_attempts == 0 {
            return Err(anyhow!("Polling max_attempts must be at least 1"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            service: ServiceConfig::default(),
            translation: TranslationConfig::default(),
            folders: FolderConfig::default(),
            polling: PollingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
