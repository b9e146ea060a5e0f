// Lexicon-based polarity scoring.
// Each lexicon token contributes its weight, scaled by preceding degree modifiers
// and inverted by nearby negations; the sum is squashed into [-1, 1].
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::normalizer::TokenStream;
use super::resources::LanguageResources;
use crate::error::{Result, SentimentError};

/// Net polarity of one token stream, always within [-1.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct CompoundScore(f32);

impl CompoundScore {
    pub const NEUTRAL: CompoundScore = CompoundScore(0.0);

    /// Clamps into range; NaN becomes 0.0.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        CompoundScore(value.clamp(-1.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// How many tokens before a lexicon word are searched for negations.
    pub negation_window: usize,
    /// Multiplier applied once per negation found in the window.
    pub negation_scalar: f32,
    /// Smoothing constant of the squashing function.
    pub normalization_alpha: f32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            negation_window: 3,
            negation_scalar: -0.74,
            normalization_alpha: 15.0,
        }
    }
}

impl ScoringParams {
    pub fn validate(&self) -> Result<()> {
        if !self.negation_scalar.is_finite() || self.negation_scalar >= 0.0 {
            return Err(SentimentError::InvalidConfig(format!(
                "negation_scalar must be negative, got {}",
                self.negation_scalar
            )));
        }
        if !self.normalization_alpha.is_finite() || self.normalization_alpha <= 0.0 {
            return Err(SentimentError::InvalidConfig(format!(
                "normalization_alpha must be positive, got {}",
                self.normalization_alpha
            )));
        }
        Ok(())
    }
}

pub struct LexiconScorer<'r> {
    resources: &'r LanguageResources,
    params: ScoringParams,
}

impl<'r> LexiconScorer<'r> {
    pub fn new(resources: &'r LanguageResources, params: ScoringParams) -> Self {
        Self { resources, params }
    }

    pub fn score(&self, tokens: &TokenStream) -> CompoundScore {
        if tokens.is_empty() {
            return CompoundScore::NEUTRAL;
        }

        let words = tokens.as_slice();
        let mut sum = 0.0_f32;
        for i in 0..words.len() {
            if let Some(valence) = self.token_valence(words, i) {
                sum += valence;
            }
        }

        let compound = squash(sum, self.params.normalization_alpha);
        trace!(raw = sum, compound, tokens = words.len(), "scored token stream");
        CompoundScore::new(compound)
    }

    fn token_valence(&self, words: &[String], i: usize) -> Option<f32> {
        let mut valence = self.resources.weight(&words[i])?;

        // Degree modifiers stack while they sit directly in front of the word.
        for prev in words[..i].iter().rev() {
            match self.resources.intensifier(prev) {
                Some(multiplier) => valence *= multiplier,
                None => break,
            }
        }

        // A negation binds to the nearest sentiment word only.
        for prev in words[..i].iter().rev().take(self.params.negation_window) {
            if self.resources.is_negation(prev) {
                valence *= self.params.negation_scalar;
            } else if self.resources.weight(prev).is_some() {
                break;
            }
        }

        Some(valence)
    }
}

// Equivalent to sum / sqrt(sum^2 + alpha), rearranged so a huge sum saturates
// to +/-1 instead of overflowing.
fn squash(sum: f32, alpha: f32) -> f32 {
    if sum == 0.0 || sum.is_nan() {
        return 0.0;
    }
    if sum.is_infinite() {
        return sum.signum();
    }
    sum.signum() / (1.0 + alpha / (sum * sum)).sqrt()
}
