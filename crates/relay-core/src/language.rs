//! Language codes and script-based detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language code assumed when the channel does not say otherwise.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Telugu Unicode block.
const TELUGU: std::ops::RangeInclusive<u32> = 0x0C00..=0x0C7F;

/// Devanagari Unicode block.
const DEVANAGARI: std::ops::RangeInclusive<u32> = 0x0900..=0x097F;

/// A short language code threaded through translation and the response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    /// `en`
    English,
    /// `hi`
    Hindi,
    /// `te`
    Telugu,
    /// Any other code supplied by the caller, kept verbatim.
    Other(String),
}

impl Language {
    /// The short code for this language.
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
            Language::Other(code) => code,
        }
    }

    /// Whether replies in this language need no translation.
    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }

    /// Resolve the language for an inbound message.
    ///
    /// The caller-supplied code wins unless it is absent, empty, or the
    /// default (`en`); in those cases the text is run through
    /// [`detect_language`].
    pub fn from_request(requested: Option<&str>, text: &str) -> Self {
        match requested {
            Some(code) if !code.is_empty() && code != DEFAULT_LANGUAGE => Self::from(code),
            _ => detect_language(text),
        }
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        match code {
            "en" => Language::English,
            "hi" => Language::Hindi,
            "te" => Language::Telugu,
            other => Language::Other(other.to_string()),
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Classify text as Telugu, Hindi, or English by counting code points.
///
/// Telugu wins when it has at least one character and at least as many as
/// Devanagari; otherwise any Devanagari means Hindi; everything else is
/// English. This is a script heuristic, not language identification.
pub fn detect_language(text: &str) -> Language {
    let mut telugu = 0usize;
    let mut devanagari = 0usize;

    for c in text.chars() {
        let cp = c as u32;
        if TELUGU.contains(&cp) {
            telugu += 1;
        } else if DEVANAGARI.contains(&cp) {
            devanagari += 1;
        }
    }

    if telugu > 0 && telugu >= devanagari {
        Language::Telugu
    } else if devanagari > 0 {
        Language::Hindi
    } else {
        Language::English
    }
}
