//! Intent classification
//!
//! A static keyword table, matched in insertion order. Iteration order is
//! match priority: the first intent whose phrase fully matches wins, with no
//! ranking by specificity. The table is therefore an ordered sequence, never
//! a map.
//!
//! A phrase matches when every whitespace-separated word of it appears as a
//! substring anywhere in the normalized text, order-independent: the phrase
//! "order status" matches text that mentions "status" before "order".

/// Intent tag returned when no phrase matches
pub const DEFAULT_INTENT: &str = "default";

/// Intent tag for thanks, consulted by the conversation controller
pub const THANKS_INTENT: &str = "thanks";

/// One row of the intent keyword table
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Intent tag
    pub name: &'static str,
    /// Trigger phrases, in priority order
    pub phrases: &'static [&'static str],
}

/// The built-in intent table, in priority order
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule {
            name: "track_order",
            phrases: &[
                "where is my order",
                "order status",
                "track my order",
                "order late",
                "tracking",
                "order not delivered",
            ],
        },
        IntentRule {
            name: "cancel_order",
            phrases: &[
                "cancel my order",
                "i want to cancel",
                "stop my order",
                "order cancel",
            ],
        },
        IntentRule {
            name: "return_order",
            phrases: &[
                "return product",
                "return item",
                "how to return",
                "product not good",
                "i want to return",
            ],
        },
        IntentRule {
            name: "refund",
            phrases: &[
                "i want a refund",
                "money back",
                "refund not received",
                "get my money",
                "refund issue",
                "want a refund for my product",
            ],
        },
        IntentRule {
            name: "damaged_product",
            phrases: &[
                "broken",
                "damaged",
                "not working",
                "received wrong item",
                "defective",
                "not functioning",
            ],
        },
        IntentRule {
            name: "replace_product",
            phrases: &[
                "replace product",
                "i want a replacement",
                "need a replacement",
                "replace item",
                "exchange product",
                "product exchange",
                "want to exchange",
            ],
        },
        IntentRule {
            name: THANKS_INTENT,
            phrases: &["thank you", "thanks", "shukriya", "dhanyawad"],
        },
        IntentRule {
            name: "help",
            phrases: &[
                "help",
                "i need help",
                "can you help me",
                "please help",
                "i want help",
                "madad karo",
                "mujhe madad chahiye",
            ],
        },
    ]
}

/// Intent classifier
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// Create a classifier with the built-in table
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create a classifier with a custom ordered table
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Detect intent from normalized text
    ///
    /// Total: returns [`DEFAULT_INTENT`] when nothing matches.
    pub fn detect(&self, text: &str) -> &'static str {
        for rule in &self.rules {
            for phrase in rule.phrases {
                if phrase.split_whitespace().all(|word| text.contains(word)) {
                    tracing::debug!(intent = rule.name, phrase, "intent matched");
                    return rule.name;
                }
            }
        }
        DEFAULT_INTENT
    }

    /// Get the phrase list for an intent tag
    pub fn phrases(&self, name: &str) -> Option<&'static [&'static str]> {
        self.rules.iter().find(|r| r.name == name).map(|r| r.phrases)
    }

    /// List all intent tags in priority order
    pub fn intent_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_order() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.detect("where is my order"), "track_order");
    }

    #[test]
    fn test_word_containment_is_order_independent() {
        let classifier = IntentClassifier::new();
        // "order status" matches even with the words reversed in the text
        assert_eq!(classifier.detect("status of the order"), "track_order");
    }

    #[test]
    fn test_first_match_wins_by_table_order() {
        let classifier = IntentClassifier::new();
        // "cancel my order" also contains every word of no earlier phrase,
        // so cancel_order wins only because track_order has no match
        assert_eq!(classifier.detect("cancel my order please"), "cancel_order");
        // A text matching both track_order and damaged_product resolves to
        // the earlier table entry
        assert_eq!(classifier.detect("order late and broken"), "track_order");
    }

    #[test]
    fn test_damaged_product() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.detect("this product is broken im furious"), "damaged_product");
    }

    #[test]
    fn test_thanks() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.detect("thank you"), THANKS_INTENT);
        assert_eq!(classifier.detect("shukriya"), THANKS_INTENT);
    }

    #[test]
    fn test_default_iff_nothing_matches() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.detect("the weather is lovely today"), DEFAULT_INTENT);
        assert_eq!(classifier.detect(""), DEFAULT_INTENT);
    }

    #[test]
    fn test_custom_rule_order_is_respected() {
        let classifier = IntentClassifier::with_rules(vec![
            IntentRule {
                name: "b",
                phrases: &["common"],
            },
            IntentRule {
                name: "a",
                phrases: &["common"],
            },
        ]);
        assert_eq!(classifier.detect("common"), "b");
    }

    #[test]
    fn test_phrases_lookup() {
        let classifier = IntentClassifier::new();
        assert!(classifier.phrases(THANKS_INTENT).unwrap().contains(&"thanks"));
        assert!(classifier.phrases("unknown").is_none());
    }
}
