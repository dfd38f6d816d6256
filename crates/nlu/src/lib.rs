//! Natural-language understanding for the support assistant
//!
//! This crate provides the classification pipeline:
//! - **Normalization**: lowercase, strip ASCII punctuation
//! - **Language**: script-based identification collapsed to English/Hindi
//!   with an asymmetric English default
//! - **Sentiment**: lexicon polarity scoring bucketed into three levels,
//!   English only
//! - **Intent**: ordered keyword table, first match wins
//!
//! # Example
//!
//! ```ignore
//! use sahayak_nlu::{normalize, IntentClassifier};
//!
//! let classifier = IntentClassifier::new();
//! let intent = classifier.detect(&normalize("Where is my order?"));
//! assert_eq!(intent, "track_order");
//! ```

pub mod intent;
pub mod language;
pub mod normalize;
pub mod sentiment;

pub use intent::{default_rules, IntentClassifier, IntentRule, DEFAULT_INTENT, THANKS_INTENT};
pub use language::{
    create_detector, LanguageClassifier, LanguageConfig, LanguageProvider, NoopDetector,
    ScriptLanguageDetector,
};
pub use normalize::normalize;
pub use sentiment::{
    bucket, create_scorer, LexiconScorer, NoopScorer, Sentiment, SentimentClassifier,
    SentimentConfig, SentimentProvider, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
