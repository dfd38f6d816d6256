//! Trigger phrase sets and their matchers
//!
//! Three matching disciplines coexist here and must not be mixed up:
//! - exit phrases: substring containment on the lowercased raw input
//! - greetings: whole-word containment on the normalized input
//! - confirmation sets: equality against the normalized input
//!
//! Entries compared against normalized text are stored normalized, so
//! "what's up" and "that's all" remain matchable after punctuation
//! stripping.

use once_cell::sync::Lazy;
use regex::Regex;
use sahayak_core::Language;
use sahayak_nlu::normalize;

/// Greeting tokens, whole-word matched in either language
pub static ENGLISH_GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good evening",
    "whats up",
    "yo",
    "greetings",
];

pub static HINDI_GREETINGS: &[&str] = &[
    "नमस्ते",
    "नमस्कार",
    "हैलो",
    "हाय",
    "सलाम",
    "सुप्रभात",
    "राम राम",
];

static ENGLISH_HOW_ARE_YOU: &[&str] = &["how are you", "how are you doing", "how are you today"];

static HINDI_HOW_ARE_YOU: &[&str] = &[
    "कैसे हो",
    "कैसी हो",
    "कैसे हो बॉट",
    "आप कैसे हो",
    "तुम कैसे हो",
];

/// Farewell keywords, language-agnostic substring match
pub static FAREWELL_KEYWORDS: &[&str] = &["bye", "goodbye", "अलविदा", "बाय"];

/// Exit phrases, substring-matched against the lowercased raw input.
///
/// Bare "thank you" is absent so that a lone thanks reaches the
/// controller's gating path instead of terminating; bare "no" is absent
/// because as a substring it would terminate on any negation ("not
/// working").
pub static EXIT_PHRASES: &[&str] = &[
    "exit",
    "quit",
    "bye",
    "goodbye",
    "see you",
    "that's it",
    "no thanks",
    "i'm done",
    "done",
    "that's all",
    "nothing else",
];

/// Affirmative confirmation responses, equality-matched after normalization
static AFFIRMATIVE: Lazy<Vec<String>> = Lazy::new(|| {
    ["yes", "yeah", "yep", "sure", "i have a question", "another question"]
        .iter()
        .map(|s| normalize(s))
        .collect()
});

/// Negative confirmation responses, equality-matched after normalization
static NEGATIVE: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "no",
        "no thanks",
        "nothing",
        "nothing else",
        "exit",
        "quit",
        "done",
        "that's all",
    ]
    .iter()
    .map(|s| normalize(s))
    .collect()
});

/// Whole-word matchers for every greeting token of both languages.
/// `\b` is Unicode-aware, so Devanagari token boundaries work.
static GREETING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ENGLISH_GREETINGS
        .iter()
        .chain(HINDI_GREETINGS.iter())
        .map(|token| Regex::new(&format!(r"\b{}\b", regex::escape(token))).unwrap())
        .collect()
});

/// How-are-you phrase set for a language
pub fn how_are_you_phrases(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => ENGLISH_HOW_ARE_YOU,
        Language::Hindi => HINDI_HOW_ARE_YOU,
    }
}

/// Substring containment against a phrase list
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

/// Whole-word greeting detection across both languages
pub fn contains_greeting(text: &str) -> bool {
    GREETING_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

/// Check the raw input against the exit phrase set
pub fn is_exit_message(raw: &str) -> bool {
    let text = raw.to_lowercase();
    let text = text.trim();
    EXIT_PHRASES.iter().any(|phrase| text.contains(phrase))
}

/// Check a normalized input against the affirmative confirmation set
pub fn is_affirmative(normalized: &str) -> bool {
    AFFIRMATIVE.iter().any(|entry| entry == normalized)
}

/// Check a normalized input against the negative confirmation set
pub fn is_negative(normalized: &str) -> bool {
    NEGATIVE.iter().any(|entry| entry == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_whole_word() {
        assert!(contains_greeting("hi there"));
        assert!(contains_greeting("नमस्ते"));
        assert!(contains_greeting("whats up"));
        // "hi" must not match inside another word
        assert!(!contains_greeting("this order is late"));
        assert!(!contains_greeting("shipment"));
    }

    #[test]
    fn test_exit_substring() {
        assert!(is_exit_message("thank you, that's it"));
        assert!(is_exit_message("EXIT"));
        assert!(is_exit_message("ok i'm done now"));
        // A lone thanks is not an exit
        assert!(!is_exit_message("thank you"));
        // Negations are not exits
        assert!(!is_exit_message("the product is not working"));
    }

    #[test]
    fn test_affirmative_equality() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("i have a question"));
        // Equality, not containment
        assert!(!is_affirmative("yes please"));
    }

    #[test]
    fn test_negative_equality_after_normalization() {
        assert!(is_negative("no"));
        // "that's all" normalizes to "thats all" and still matches
        assert!(is_negative(&normalize("that's all")));
        assert!(!is_negative("maybe"));
    }

    #[test]
    fn test_how_are_you_sets() {
        assert!(contains_any("how are you today", how_are_you_phrases(Language::English)));
        assert!(contains_any("आप कैसे हो", how_are_you_phrases(Language::Hindi)));
        assert!(!contains_any("how is my order", how_are_you_phrases(Language::English)));
    }
}
