//! Language classification
//!
//! Wraps a `LanguageDetector` capability and collapses its result into the
//! closed `Language` enum. The collapse is deliberately asymmetric: the
//! detector must report exactly `"hi"` for the utterance to be treated as
//! Hindi; every other code, and every detector failure, resolves to English.

use std::sync::Arc;

use async_trait::async_trait;
use sahayak_core::{Error, Language, LanguageDetector, Result, Script};
use serde::{Deserialize, Serialize};

/// Language classification configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: LanguageProvider,
}

/// Language detection providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProvider {
    /// Unicode-script majority vote (native, no model required)
    #[default]
    Script,
    /// Disabled: detection always fails, so everything resolves to English
    Disabled,
}

/// Create language detector based on config
pub fn create_detector(config: &LanguageConfig) -> Arc<dyn LanguageDetector> {
    match config.provider {
        LanguageProvider::Script => Arc::new(ScriptLanguageDetector::new()),
        LanguageProvider::Disabled => {
            tracing::info!("Language detection disabled, defaulting to English");
            Arc::new(NoopDetector)
        },
    }
}

/// Script-based language identification
///
/// Counts characters that carry script evidence (Devanagari block vs. Latin
/// letters) and reports the majority script's language code. Input with no
/// script evidence at all (empty, digits, punctuation) is a detection
/// failure.
pub struct ScriptLanguageDetector;

impl ScriptLanguageDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScriptLanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageDetector for ScriptLanguageDetector {
    async fn detect(&self, text: &str) -> Result<String> {
        match Script::detect(text) {
            Some(Script::Devanagari) => Ok(Language::Hindi.code().to_string()),
            Some(Script::Latin) => Ok(Language::English.code().to_string()),
            None => Err(Error::Detection(format!(
                "no script evidence in {} chars",
                text.chars().count()
            ))),
        }
    }

    fn name(&self) -> &str {
        "script"
    }
}

/// Detector that always fails, for the disabled provider
pub struct NoopDetector;

#[async_trait]
impl LanguageDetector for NoopDetector {
    async fn detect(&self, _text: &str) -> Result<String> {
        Err(Error::Detection("detector disabled".to_string()))
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Language classifier
///
/// Total over its input: never fails, never returns anything outside the
/// `Language` enum.
pub struct LanguageClassifier {
    detector: Arc<dyn LanguageDetector>,
}

impl LanguageClassifier {
    pub fn new(detector: Arc<dyn LanguageDetector>) -> Self {
        Self { detector }
    }

    /// Classify the language of a raw (non-normalized) utterance
    pub async fn classify(&self, text: &str) -> Language {
        match self.detector.detect(text).await {
            Ok(code) if code == Language::Hindi.code() => Language::Hindi,
            Ok(code) => {
                tracing::trace!(detector = self.detector.name(), %code, "non-Hindi detection");
                Language::English
            },
            Err(e) => {
                tracing::debug!(
                    detector = self.detector.name(),
                    error = %e,
                    "language detection failed, defaulting to English"
                );
                Language::English
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_detector_codes() {
        let detector = ScriptLanguageDetector::new();
        assert_eq!(detector.detect("नमस्ते").await.unwrap(), "hi");
        assert_eq!(detector.detect("hello there").await.unwrap(), "en");
    }

    #[tokio::test]
    async fn test_script_detector_fails_without_evidence() {
        let detector = ScriptLanguageDetector::new();
        assert!(detector.detect("").await.is_err());
        assert!(detector.detect("1234 !?").await.is_err());
    }

    #[tokio::test]
    async fn test_classifier_hindi_only_on_exact_code() {
        let classifier = LanguageClassifier::new(Arc::new(ScriptLanguageDetector::new()));
        assert_eq!(classifier.classify("नमस्ते").await, Language::Hindi);
        assert_eq!(classifier.classify("where is my order").await, Language::English);
    }

    #[tokio::test]
    async fn test_classifier_failure_defaults_to_english() {
        let classifier = LanguageClassifier::new(Arc::new(ScriptLanguageDetector::new()));
        assert_eq!(classifier.classify("").await, Language::English);
        assert_eq!(classifier.classify("???").await, Language::English);
    }

    #[tokio::test]
    async fn test_disabled_provider_resolves_english() {
        let config = LanguageConfig {
            provider: LanguageProvider::Disabled,
        };
        let classifier = LanguageClassifier::new(create_detector(&config));
        assert_eq!(classifier.classify("नमस्ते").await, Language::English);
    }

    #[test]
    fn test_default_config() {
        let config = LanguageConfig::default();
        assert_eq!(config.provider, LanguageProvider::Script);
    }
}
