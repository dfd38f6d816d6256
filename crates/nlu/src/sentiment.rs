//! Sentiment classification
//!
//! Wraps a `SentimentScorer` capability and buckets its continuous polarity
//! into three levels. Hindi text is never scored: emotion is hardcoded to
//! neutral for it, and the scorer is not invoked at all. Thresholds are
//! fixed constants, not configuration.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use sahayak_core::{Language, Result, SentimentScorer};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Polarity below this is negative
pub const NEGATIVE_THRESHOLD: f32 = -0.2;
/// Polarity above this is positive
pub const POSITIVE_THRESHOLD: f32 = 0.2;

/// Bucketed sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bucket a continuous polarity score
pub fn bucket(polarity: f32) -> Sentiment {
    if polarity < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else if polarity > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

/// Sentiment classification configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentimentConfig {
    /// Which provider to use
    #[serde(default)]
    pub provider: SentimentProvider,
}

/// Sentiment scoring providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentProvider {
    /// Static valence lexicon (native, no model required)
    #[default]
    Lexicon,
    /// Disabled: every utterance scores neutral
    Disabled,
}

/// Create sentiment scorer based on config
pub fn create_scorer(config: &SentimentConfig) -> Arc<dyn SentimentScorer> {
    match config.provider {
        SentimentProvider::Lexicon => Arc::new(LexiconScorer::new()),
        SentimentProvider::Disabled => {
            tracing::info!("Sentiment scoring disabled, treating all input as neutral");
            Arc::new(NoopScorer)
        },
    }
}

/// Word valences in [-1, 1]
static VALENCE: Lazy<HashMap<&'static str, f32>> = Lazy::new(|| {
    HashMap::from([
        // Negative affect common in support conversations
        ("bad", -0.7),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("worst", -1.0),
        ("poor", -0.4),
        ("broken", -0.4),
        ("damaged", -0.4),
        ("defective", -0.5),
        ("faulty", -0.5),
        ("wrong", -0.5),
        ("late", -0.3),
        ("delayed", -0.3),
        ("missing", -0.4),
        ("angry", -0.7),
        ("furious", -0.9),
        ("annoyed", -0.6),
        ("annoying", -0.6),
        ("frustrated", -0.6),
        ("frustrating", -0.6),
        ("disappointed", -0.65),
        ("disappointing", -0.65),
        ("upset", -0.6),
        ("useless", -0.8),
        ("pathetic", -0.8),
        ("unhappy", -0.6),
        ("unacceptable", -0.7),
        ("ridiculous", -0.5),
        // Positive affect
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("awesome", 1.0),
        ("amazing", 0.6),
        ("perfect", 1.0),
        ("wonderful", 1.0),
        ("fantastic", 0.9),
        ("happy", 0.8),
        ("glad", 0.5),
        ("love", 0.5),
        ("nice", 0.6),
        ("fine", 0.4),
        ("helpful", 0.5),
        ("best", 1.0),
        ("satisfied", 0.5),
    ])
});

/// Negators flip and dampen the following word, TextBlob-style
static NEGATORS: &[&str] = &["not", "no", "never", "dont", "cant", "isnt", "wasnt", "wont"];

/// Lexicon-based polarity scorer
///
/// Mean valence of matched words; a preceding negator multiplies the word's
/// valence by -0.5. Uses Unicode word boundaries so mixed-script input
/// tokenizes cleanly.
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentScorer for LexiconScorer {
    async fn score(&self, text: &str) -> Result<f32> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.unicode_words().collect();

        let mut total = 0.0f32;
        let mut matched = 0usize;

        for (i, word) in words.iter().enumerate() {
            if let Some(&valence) = VALENCE.get(word) {
                let negated = i > 0 && NEGATORS.contains(&words[i - 1]);
                total += if negated { valence * -0.5 } else { valence };
                matched += 1;
            }
        }

        if matched == 0 {
            return Ok(0.0);
        }

        Ok((total / matched as f32).clamp(-1.0, 1.0))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Scorer that treats everything as neutral, for the disabled provider
pub struct NoopScorer;

#[async_trait]
impl SentimentScorer for NoopScorer {
    async fn score(&self, _text: &str) -> Result<f32> {
        Ok(0.0)
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Sentiment classifier
pub struct SentimentClassifier {
    scorer: Arc<dyn SentimentScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    /// Classify a normalized utterance
    ///
    /// Hindi input short-circuits to `Neutral` without invoking the scorer.
    /// Scorer failures degrade to `Neutral`.
    pub async fn classify(&self, text: &str, language: Language) -> Sentiment {
        if language == Language::Hindi {
            return Sentiment::Neutral;
        }

        match self.scorer.score(text).await {
            Ok(polarity) => {
                let sentiment = bucket(polarity);
                tracing::trace!(scorer = self.scorer.name(), polarity, %sentiment, "scored");
                sentiment
            },
            Err(e) => {
                tracing::debug!(
                    scorer = self.scorer.name(),
                    error = %e,
                    "sentiment scoring failed, treating as neutral"
                );
                Sentiment::Neutral
            },
        }
    }
}
