//! Reply selection
//!
//! Composes language, intent and sentiment into the final templated reply.
//! The rules short-circuit in a fixed order; the first applicable one wins:
//!
//! 1. how-are-you small talk (language-matched set)
//! 2. greeting token (whole word, either language's set)
//! 3. thanks keyword
//! 4. farewell keyword
//! 5. intent template, with an empathy prefix for negative sentiment

use sahayak_core::Language;
use sahayak_nlu::{IntentClassifier, Sentiment, SentimentClassifier, THANKS_INTENT};

use crate::catalog::ResponseCatalog;
use crate::phrases;

/// Reply selector
pub struct ReplySelector {
    intents: IntentClassifier,
    sentiment: SentimentClassifier,
    catalog: ResponseCatalog,
}

impl ReplySelector {
    pub fn new(
        intents: IntentClassifier,
        sentiment: SentimentClassifier,
        catalog: ResponseCatalog,
    ) -> Self {
        Self {
            intents,
            sentiment,
            catalog,
        }
    }

    /// Classify intent on normalized text
    ///
    /// Exposed for the conversation controller, which needs the intent tag
    /// before deciding whether the selector runs at all.
    pub fn classify_intent(&self, normalized: &str) -> &'static str {
        self.intents.detect(normalized)
    }

    /// Select the reply for one utterance
    ///
    /// `normalized` is the normalized form of the raw input; `language` has
    /// already been resolved by the language classifier. Always produces a
    /// string.
    pub async fn select(&self, normalized: &str, language: Language) -> String {
        if phrases::contains_any(normalized, phrases::how_are_you_phrases(language)) {
            tracing::debug!(%language, rule = "how_are_you", "reply selected");
            return self.catalog.template_or_default(language, "how_are_you").to_string();
        }

        if phrases::contains_greeting(normalized) {
            tracing::debug!(%language, rule = "greeting", "reply selected");
            return self.catalog.template_or_default(language, "greeting").to_string();
        }

        let thanks_keywords = self.intents.phrases(THANKS_INTENT).unwrap_or_default();
        if phrases::contains_any(normalized, thanks_keywords) {
            tracing::debug!(%language, rule = "thank_you", "reply selected");
            return self.catalog.template_or_default(language, "thank_you").to_string();
        }

        if phrases::contains_any(normalized, phrases::FAREWELL_KEYWORDS) {
            tracing::debug!(%language, rule = "bye", "reply selected");
            return self.catalog.template_or_default(language, "bye").to_string();
        }

        let intent = self.intents.detect(normalized);
        let sentiment = self.sentiment.classify(normalized, language).await;
        let base = self.catalog.template_or_default(language, intent);

        tracing::debug!(%language, intent, %sentiment, rule = "intent", "reply selected");

        if sentiment == Sentiment::Negative {
            format!("{}{}", self.catalog.empathy_prefix(language), base)
        } else {
            base.to_string()
        }
    }
}
