//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Assistant configuration
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Assistant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display name used in the reply prefix
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// Print the welcome banner at startup
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Enable script-based language identification.
    /// When disabled every utterance resolves to English.
    #[serde(default = "default_true")]
    pub language_detection: bool,

    /// Enable lexicon-based sentiment scoring for English utterances.
    /// When disabled every utterance is treated as neutral.
    #[serde(default = "default_true")]
    pub sentiment_analysis: bool,
}

fn default_assistant_name() -> String {
    "Customer Assistant".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            show_banner: true,
            language_detection: true,
            sentiment_analysis: true,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level for the assistant crates (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env}.yaml > config/default.yaml > defaults.
/// Every file layer is optional; an empty directory yields the defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder =
        Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(env) = env {
        builder = builder.add_source(File::with_name(&format!("config/{env}")).required(false));
    }

    builder = builder.add_source(Environment::with_prefix("SAHAYAK").separator("__"));

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
        assert_eq!(settings.assistant.name, "Customer Assistant");
        assert!(settings.assistant.language_detection);
        assert!(settings.assistant.sentiment_analysis);
        assert_eq!(settings.observability.log_level, "info");
        assert!(!settings.observability.log_json);
    }

    #[test]
    fn test_environment_flags() {
        assert!(RuntimeEnvironment::Production.is_production());
        assert!(!RuntimeEnvironment::Development.is_production());
    }

    #[test]
    fn test_load_settings_without_files() {
        // Every file layer is optional, so a missing config directory
        // yields the defaults.
        let settings = load_settings(Some("nonexistent")).unwrap();
        assert_eq!(settings.assistant.name, "Customer Assistant");
    }
}
