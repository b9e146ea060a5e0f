// Sentiment analysis pipeline: normalize -> score -> classify, one text or a batch.
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::{SentimentLabel, Thresholds};
use super::normalizer::{Normalizer, TokenStream};
use super::resources::LanguageResources;
use super::scorer::{CompoundScore, LexiconScorer, ScoringParams};
use super::summary::BatchSummary;
use crate::config::AnalyzerConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: SentimentLabel,
}

/// Owns the loaded language resources and the classification policy.
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    resources: Arc<LanguageResources>,
    thresholds: Thresholds,
    scoring: ScoringParams,
}

impl SentimentAnalyzer {
    /// Loads the configured resource bundle eagerly; fails if it cannot be loaded.
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let resources = LanguageResources::load(&config.resource_source())?;
        Ok(Self::with_resources(
            Arc::new(resources),
            config.thresholds,
            config.scoring,
        ))
    }

    pub fn with_resources(
        resources: Arc<LanguageResources>,
        thresholds: Thresholds,
        scoring: ScoringParams,
    ) -> Self {
        Self {
            resources,
            thresholds,
            scoring,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    pub fn normalize(&self, text: &str) -> TokenStream {
        Normalizer::new(&self.resources).normalize(text)
    }

    pub fn normalize_text(&self, text: &str) -> String {
        Normalizer::new(&self.resources).normalize_text(text)
    }

    pub fn normalize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let normalizer = Normalizer::new(&self.resources);
        texts
            .iter()
            .map(|t| normalizer.normalize_text(t.as_ref()))
            .collect()
    }

    pub fn score(&self, tokens: &TokenStream) -> CompoundScore {
        LexiconScorer::new(&self.resources, self.scoring).score(tokens)
    }

    pub fn classify(&self, score: CompoundScore) -> SentimentLabel {
        self.thresholds.classify(score)
    }

    pub fn classify_text(&self, text: &str) -> SentimentLabel {
        // Blank input is neutral without consulting the lexicon.
        if text.trim().is_empty() {
            return SentimentLabel::Neutral;
        }
        let tokens = self.normalize(text);
        self.classify(self.score(&tokens))
    }

    pub fn analyze_one(&self, text: &str) -> AnalysisResult {
        AnalysisResult {
            text: text.to_string(),
            sentiment: self.classify_text(text),
        }
    }

    /// Analyzes every text independently; output order matches input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<AnalysisResult>
    where
        S: AsRef<str> + Sync,
    {
        debug!(items = texts.len(), "analyzing batch");
        texts
            .par_iter()
            .map(|t| self.analyze_one(t.as_ref()))
            .collect()
    }

    pub fn classify_batch<S>(&self, texts: &[S]) -> Vec<AnalysisResult>
    where
        S: AsRef<str> + Sync,
    {
        self.analyze_batch(texts)
    }

    pub fn summarize_batch(&self, results: &[AnalysisResult]) -> BatchSummary {
        BatchSummary::from_results(results)
    }
}
