//! Language and script definitions
//!
//! The assistant speaks English and Hindi. Everything that is not
//! recognisably Hindi is treated as English downstream, so the enum stays
//! closed on purpose.

use serde::{Deserialize, Serialize};

/// Supported conversation languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::English => Script::Latin,
            Self::Hindi => Script::Devanagari,
        }
    }

    /// Parse from a detector language code (case-insensitive)
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems the assistant can recognise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Devanagari => (0x0900, 0x097F),
        }
    }

    /// Check if a character belongs to this script
    ///
    /// For Latin, only alphabetic characters count: the ASCII block also
    /// covers digits, whitespace and punctuation, which carry no language
    /// evidence.
    pub fn contains_char(&self, c: char) -> bool {
        match self {
            Self::Latin => c.is_ascii_alphabetic(),
            Self::Devanagari => {
                let code = c as u32;
                let (start, end) = self.unicode_range();
                code >= start && code <= end
            },
        }
    }

    /// Detect script from text (returns most frequent script)
    pub fn detect(text: &str) -> Option<Self> {
        let mut latin = 0usize;
        let mut devanagari = 0usize;

        for c in text.chars() {
            if Self::Devanagari.contains_char(c) {
                devanagari += 1;
            } else if Self::Latin.contains_char(c) {
                latin += 1;
            }
        }

        if latin == 0 && devanagari == 0 {
            None
        } else if devanagari > latin {
            Some(Self::Devanagari)
        } else {
            Some(Self::Latin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::Hindi.script(), Script::Devanagari);
        assert_eq!(Language::English.script(), Script::Latin);
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("hi"), Some(Language::Hindi));
        assert_eq!(Language::from_code("Hindi"), Some(Language::Hindi));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("ta"), None);
    }

    #[test]
    fn test_script_detect() {
        assert_eq!(Script::detect("Hello world"), Some(Script::Latin));
        assert_eq!(Script::detect("नमस्ते"), Some(Script::Devanagari));
        assert_eq!(Script::detect("123 !?"), None);
        assert_eq!(Script::detect(""), None);
    }

    #[test]
    fn test_script_detect_mixed() {
        // Majority script wins
        assert_eq!(Script::detect("नमस्ते जी ok"), Some(Script::Devanagari));
        assert_eq!(Script::detect("hello नमस्ते hello there"), Some(Script::Latin));
    }
}
