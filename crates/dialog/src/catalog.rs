//! Response catalog
//!
//! Static bilingual reply templates. Every intent tag has a template in both
//! languages; unknown keys fall back to the language's default template. The
//! wording and emoji are part of the user-visible contract and must not be
//! edited casually.

use sahayak_core::Language;

/// Farewell used if a language ever has no `bye` template
pub const FALLBACK_FAREWELL: &str = "Goodbye!";

/// Startup banner
pub const BANNER: &str =
    "🤖 Welcome to Customer Assistant! Type 'exit' or 'thank you, that’s it' to end.";

/// Static bilingual response tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseCatalog;

impl ResponseCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Look up a template by reply key
    pub fn template(&self, language: Language, key: &str) -> Option<&'static str> {
        match language {
            Language::English => english_template(key),
            Language::Hindi => hindi_template(key),
        }
    }

    /// Look up a template, falling back to the language's default
    pub fn template_or_default(&self, language: Language, key: &str) -> &'static str {
        self.template(language, key)
            .unwrap_or_else(|| default_template(language))
    }

    /// Farewell line in the given language
    pub fn farewell(&self, language: Language) -> &'static str {
        self.template(language, "bye").unwrap_or(FALLBACK_FAREWELL)
    }

    /// Empathy prefix prepended to replies for negative sentiment
    pub fn empathy_prefix(&self, language: Language) -> &'static str {
        match language {
            Language::English => "I'm really sorry to hear that. ",
            Language::Hindi => "हमें खेद है कि आपको परेशानी हुई। ",
        }
    }

    /// Welcome/continue prompt emitted on the first thanks after a
    /// substantive exchange
    pub fn welcome_prompt(&self, language: Language) -> &'static str {
        match language {
            Language::English => {
                "You're welcome! Do you have another question, or would you like to end the conversation?"
            },
            Language::Hindi => {
                "आपका स्वागत है! क्या आपके पास और कोई सवाल है, या आप बातचीत समाप्त करना चाहते हैं?"
            },
        }
    }

    /// Prompt emitted when the user wants to continue after the
    /// exit-confirmation question
    pub fn continue_prompt(&self) -> &'static str {
        "Sure! Please go ahead."
    }

    /// Re-prompt emitted for unrecognised input while awaiting exit
    /// confirmation
    pub fn reprompt(&self) -> &'static str {
        "I'm here if you have another question, or you can type 'exit' to leave. 😊"
    }
}

fn default_template(language: Language) -> &'static str {
    match language {
        Language::English => "I'm here to help with any order-related issue. Could you tell me more?",
        Language::Hindi => "मैं आपकी ऑर्डर से जुड़ी किसी भी समस्या में मदद कर सकता हूँ। कृपया बताएं।",
    }
}

fn english_template(key: &str) -> Option<&'static str> {
    match key {
        "greeting" => Some("Hello! How can I assist you today? 😊"),
        "how_are_you" => Some("I'm just a bot, but I'm happy to help you! 🤖"),
        "thank_you" => Some("You're most welcome! Let me know if you need anything else. 🙏"),
        "bye" => Some("Goodbye! Have a great day! 👋"),
        "track_order" => Some("You can track your order here: [Track Order Link]"),
        "cancel_order" => Some("To cancel your order, visit: [Cancel Order Link]"),
        "return_order" => Some("Here’s how to return your product: [Return Link]"),
        "refund" => {
            Some("Refunds are processed in 3-5 business days. Check status here: [Refund Help]")
        },
        "damaged_product" => {
            Some("I’m sorry to hear that! Please report the issue here: [Report Damage Link]")
        },
        "replace_product" => Some("You can request a replacement here: [Replacement Link]"),
        "help" => Some(
            "Sure! I can assist you with orders, returns, refunds, or any issues you have. Please tell me more.",
        ),
        "default" => Some(default_template(Language::English)),
        _ => None,
    }
}

fn hindi_template(key: &str) -> Option<&'static str> {
    match key {
        "greeting" => Some("नमस्ते! मैं आपकी कैसे मदद कर सकता हूँ? 😊"),
        "how_are_you" => Some("मैं एक बॉट हूँ, लेकिन आपकी मदद करके खुश हूँ! 🤖"),
        "thank_you" => Some("आपका स्वागत है! अगर कुछ और चाहिए हो तो बताएं। 🙏"),
        "bye" => Some("अलविदा! आपका दिन शुभ हो! 👋"),
        "track_order" => Some("आप अपना ऑर्डर यहाँ ट्रैक कर सकते हैं: [ऑर्डर ट्रैक लिंक]"),
        "cancel_order" => Some("ऑर्डर कैंसिल करने के लिए इस लिंक पर जाएं: [कैंसिल लिंक]"),
        "return_order" => Some("प्रोडक्ट रिटर्न करने का तरीका यहाँ है: [रिटर्न लिंक]"),
        "refund" => Some("रिफंड 3-5 दिनों में प्रोसेस होता है। यहाँ चेक करें: [रिफंड हेल्प]"),
        "damaged_product" => {
            Some("हमें खेद है! आप यहाँ खराब प्रोडक्ट की रिपोर्ट कर सकते हैं: [समस्या रिपोर्ट लिंक]")
        },
        "replace_product" => {
            Some("आप यहाँ से प्रोडक्ट रिप्लेसमेंट का अनुरोध कर सकते हैं: [रिप्लेसमेंट लिंक]")
        },
        "help" => Some(
            "ज़रूर! मैं आपकी ऑर्डर, रिटर्न, रिफंड या किसी अन्य समस्या में मदद कर सकता हूँ। कृपया विस्तार से बताएं।",
        ),
        "default" => Some(default_template(Language::Hindi)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_nlu::default_rules;

    #[test]
    fn test_every_intent_has_a_template_in_both_languages() {
        let catalog = ResponseCatalog::new();
        for rule in default_rules() {
            // "thanks" routes to the thank_you key, everything else is a
            // direct key
            let key = if rule.name == "thanks" { "thank_you" } else { rule.name };
            for language in [Language::English, Language::Hindi] {
                assert!(
                    catalog.template(language, key).is_some(),
                    "missing {key} template for {language}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let catalog = ResponseCatalog::new();
        assert_eq!(
            catalog.template_or_default(Language::English, "no_such_key"),
            catalog.template(Language::English, "default").unwrap()
        );
    }

    #[test]
    fn test_farewell() {
        let catalog = ResponseCatalog::new();
        assert_eq!(catalog.farewell(Language::English), "Goodbye! Have a great day! 👋");
        assert_eq!(catalog.farewell(Language::Hindi), "अलविदा! आपका दिन शुभ हो! 👋");
    }

    #[test]
    fn test_empathy_prefix_wording() {
        let catalog = ResponseCatalog::new();
        assert_eq!(catalog.empathy_prefix(Language::English), "I'm really sorry to hear that. ");
    }
}
