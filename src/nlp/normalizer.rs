// Text normalization: lowercase, tokenize, drop punctuation and stopwords.
// Negation markers survive stopword removal because the scorer needs them.
use std::fmt;
use std::slice;

use once_cell::sync::Lazy;
use regex::Regex;

use super::resources::LanguageResources;

// A word is a run of letters, marks and digits with optional internal apostrophes.
// Anything else that is not whitespace becomes a one-character token.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}]+(?:'[\p{L}\p{M}\p{N}]+)*|\S").unwrap()
});

static PUNCTUATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{P}\p{S}]+$").unwrap()
});

/// Ordered, normalized word tokens of one comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream(Vec<String>);

impl TokenStream {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TokenStream {
    fn from(tokens: Vec<String>) -> Self {
        TokenStream(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

pub struct Normalizer<'r> {
    resources: &'r LanguageResources,
}

impl<'r> Normalizer<'r> {
    pub fn new(resources: &'r LanguageResources) -> Self {
        Self { resources }
    }

    pub fn normalize(&self, text: &str) -> TokenStream {
        let text = text.trim();
        if text.is_empty() {
            return TokenStream::default();
        }

        let lowered = text.to_lowercase().replace(['\u{2018}', '\u{2019}'], "'");
        let tokens = TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !is_punctuation(token))
            .filter(|token| self.resources.is_negation(token) || !self.resources.is_stopword(token))
            .map(String::from)
            .collect();

        TokenStream(tokens)
    }

    /// Normalized text with tokens joined by single spaces.
    pub fn normalize_text(&self, text: &str) -> String {
        self.normalize(text).to_string()
    }
}

fn is_punctuation(token: &str) -> bool {
    PUNCTUATION_PATTERN.is_match(token)
}
