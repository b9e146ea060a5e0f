// Language resources: polarity lexicon, degree modifiers, negation markers and stopwords.
// Loaded once, validated, then shared read-only by every normalizer and scorer.
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Result, SentimentError};

static BUILTIN_BUNDLE: &str = include_str!("../../assets/en_resources.json");

/// Where the language resource bundle comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResourceSource {
    #[default]
    BuiltIn,
    File(PathBuf),
}

impl From<Option<PathBuf>> for ResourceSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => ResourceSource::File(p),
            None => ResourceSource::BuiltIn,
        }
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceSource::BuiltIn => write!(f, "built-in"),
            ResourceSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// On-disk shape of a resource bundle.
#[derive(Debug, Deserialize)]
struct ResourceBundle {
    lexicon: HashMap<String, f32>,
    #[serde(default)]
    intensifiers: HashMap<String, f32>,
    #[serde(default)]
    negations: Vec<String>,
    #[serde(default)]
    stopwords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LanguageResources {
    lexicon: HashMap<String, f32>,
    intensifiers: HashMap<String, f32>,
    negations: HashSet<String>,
    stopwords: HashSet<String>,
}

impl LanguageResources {
    pub fn load(source: &ResourceSource) -> Result<Self> {
        let resources = match source {
            ResourceSource::BuiltIn => Self::from_json_str(BUILTIN_BUNDLE)?,
            ResourceSource::File(path) => Self::from_file(path)?,
        };
        info!(
            source = %source,
            lexicon = resources.lexicon.len(),
            intensifiers = resources.intensifiers.len(),
            negations = resources.negations.len(),
            stopwords = resources.stopwords.len(),
            "loaded language resources"
        );
        Ok(resources)
    }

    pub fn builtin() -> Result<Self> {
        Self::load(&ResourceSource::BuiltIn)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SentimentError::ResourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let bundle: ResourceBundle =
            serde_json::from_str(json).map_err(SentimentError::ResourceParse)?;
        Self::from_bundle(bundle)
    }

    fn from_bundle(bundle: ResourceBundle) -> Result<Self> {
        if bundle.lexicon.is_empty() {
            return Err(SentimentError::InvalidResource("lexicon is empty".to_string()));
        }

        let mut lexicon = HashMap::with_capacity(bundle.lexicon.len());
        for (word, weight) in bundle.lexicon {
            if !weight.is_finite() {
                return Err(SentimentError::InvalidResource(format!(
                    "lexicon weight for {:?} is not finite",
                    word
                )));
            }
            lexicon.insert(fold_key(&word)?, weight);
        }

        let mut intensifiers = HashMap::with_capacity(bundle.intensifiers.len());
        for (word, multiplier) in bundle.intensifiers {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(SentimentError::InvalidResource(format!(
                    "intensifier multiplier for {:?} must be a positive number",
                    word
                )));
            }
            intensifiers.insert(fold_key(&word)?, multiplier);
        }

        let negations = bundle
            .negations
            .iter()
            .map(|w| fold_key(w))
            .collect::<Result<HashSet<_>>>()?;
        let stopwords = bundle
            .stopwords
            .iter()
            .map(|w| fold_key(w))
            .collect::<Result<HashSet<_>>>()?;

        let resources = Self {
            lexicon,
            intensifiers,
            negations,
            stopwords,
        };
        resources.warn_shadowed();
        Ok(resources)
    }

    // Entries that the normalizer strips before scoring never take effect.
    fn warn_shadowed(&self) {
        for word in self.lexicon.keys().chain(self.intensifiers.keys()) {
            if self.stopwords.contains(word) && !self.is_negation(word) {
                warn!(word = %word, "resource entry is also a stopword and will never be scored");
            }
        }
    }

    /// Base polarity weight of a token, if it carries one.
    pub fn weight(&self, token: &str) -> Option<f32> {
        self.lexicon.get(token).copied()
    }

    pub fn intensifier(&self, token: &str) -> Option<f32> {
        self.intensifiers.get(token).copied()
    }

    /// Negation markers are the listed words plus any `n't` contraction.
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || token.ends_with("n't")
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }
}

fn fold_key(word: &str) -> Result<String> {
    let key = word.trim().to_lowercase().replace(['\u{2018}', '\u{2019}'], "'");
    if key.is_empty() {
        return Err(SentimentError::InvalidResource(
            "resource entries must not be blank".to_string(),
        ));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_bundle_loads() {
        let resources = LanguageResources::builtin().unwrap();
        assert!(resources.lexicon_len() > 100);
        assert!(resources.weight("good").unwrap() > 0.0);
        assert!(resources.weight("terrible").unwrap() < 0.0);
        assert_eq!(resources.weight("table"), None);
    }

    #[test]
    fn test_builtin_keeps_negations_out_of_stopwords() {
        let resources = LanguageResources::builtin().unwrap();
        assert!(resources.is_negation("not"));
        assert!(resources.is_negation("nothing"));
        assert!(resources.is_stopword("the"));
        assert!(!resources.is_stopword("not"));
        assert!(!resources.is_stopword("very"));
    }

    #[test]
    fn test_contractions_are_negations() {
        let resources = LanguageResources::builtin().unwrap();
        assert!(resources.is_negation("don't"));
        assert!(resources.is_negation("wouldn't"));
        assert!(resources.is_negation("dont"));
        assert!(!resources.is_negation("do"));
    }

    #[test]
    fn test_keys_are_folded_to_lowercase() {
        let json = r#"{"lexicon": {"Great": 3.0}, "stopwords": ["The"], "negations": ["NOT"]}"#;
        let resources = LanguageResources::from_json_str(json).unwrap();
        assert_eq!(resources.weight("great"), Some(3.0));
        assert!(resources.is_stopword("the"));
        assert!(resources.is_negation("not"));
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let result = LanguageResources::from_json_str(r#"{"lexicon": {}}"#);
        assert!(matches!(result, Err(SentimentError::InvalidResource(_))));
    }

    #[test]
    fn test_nonpositive_intensifier_rejected() {
        let json = r#"{"lexicon": {"good": 1.0}, "intensifiers": {"very": 0.0}}"#;
        let result = LanguageResources::from_json_str(json);
        assert!(matches!(result, Err(SentimentError::InvalidResource(_))));
    }

    #[test]
    fn test_blank_entry_rejected() {
        let json = r#"{"lexicon": {"good": 1.0}, "stopwords": ["  "]}"#;
        let result = LanguageResources::from_json_str(json);
        assert!(matches!(result, Err(SentimentError::InvalidResource(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = LanguageResources::from_json_str("{ not json");
        assert!(matches!(result, Err(SentimentError::ResourceParse(_))));
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"lexicon": {{"splendid": 2.5}}}}"#)?;
        let resources = LanguageResources::load(&ResourceSource::File(file.path().to_path_buf()))?;
        assert_eq!(resources.weight("splendid"), Some(2.5));
        assert_eq!(resources.lexicon_len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let source = ResourceSource::File(PathBuf::from("/nonexistent/bundle.json"));
        let result = LanguageResources::load(&source);
        assert!(matches!(result, Err(SentimentError::ResourceRead { .. })));
    }

    #[test]
    fn test_source_from_option() {
        assert_eq!(ResourceSource::from(None), ResourceSource::BuiltIn);
        let path = PathBuf::from("lex.json");
        assert_eq!(
            ResourceSource::from(Some(path.clone())),
            ResourceSource::File(path)
        );
    }
}
