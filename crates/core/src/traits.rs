//! Capability traits for external collaborators
//!
//! The classification pipeline treats language identification and sentiment
//! polarity scoring as pluggable capabilities behind narrow interfaces. The
//! wrappers in `sahayak-nlu` own the policy for collapsing failures; the
//! traits themselves stay honest about them.

use crate::Result;
use async_trait::async_trait;

/// Language identification interface
///
/// Implementations:
/// - `ScriptLanguageDetector` - Unicode-script majority vote
/// - `NoopDetector` - always fails, resolving to the English default
///
/// # Example
///
/// ```ignore
/// let detector: Arc<dyn LanguageDetector> = Arc::new(ScriptLanguageDetector::new());
/// let code = detector.detect("नमस्ते").await?;
/// assert_eq!(code, "hi");
/// ```
#[async_trait]
pub trait LanguageDetector: Send + Sync + 'static {
    /// Identify the language of a raw utterance
    ///
    /// # Returns
    /// A language code such as `"en"` or `"hi"`. Detection may fail on
    /// empty or ambiguous input; callers decide what a failure means.
    async fn detect(&self, text: &str) -> Result<String>;

    /// Get detector name for logging
    fn name(&self) -> &str;
}

/// Sentiment polarity scoring interface
///
/// Implementations:
/// - `LexiconScorer` - static valence lexicon, mean of matched words
/// - `NoopScorer` - always neutral
#[async_trait]
pub trait SentimentScorer: Send + Sync + 'static {
    /// Score a normalized utterance
    ///
    /// # Returns
    /// Polarity in [-1.0, 1.0]; negative values indicate negative affect.
    async fn score(&self, text: &str) -> Result<f32>;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(&'static str);

    #[async_trait]
    impl LanguageDetector for FixedDetector {
        async fn detect(&self, _text: &str) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_detector_usable_as_trait_object() {
        let detector: Box<dyn LanguageDetector> = Box::new(FixedDetector("hi"));
        assert_eq!(detector.detect("anything").await.unwrap(), "hi");
        assert_eq!(detector.name(), "fixed");
    }
}
