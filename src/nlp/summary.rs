// Batch roll-up: per-label counts over analysis results.
// All three labels are always reported, zero when absent.
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::SentimentLabel;
use super::sentiment::AnalysisResult;

/// Label counts for one batch. Every label is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result.sentiment);
        }
        summary
    }

    /// Counts label names produced elsewhere. Names that are not a known
    /// label are skipped.
    pub fn from_label_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = Self::default();
        for name in names {
            match name.as_ref().parse::<SentimentLabel>() {
                Ok(label) => summary.record(label),
                Err(_) => debug!(label = name.as_ref(), "dropping unknown sentiment label"),
            }
        }
        summary
    }

    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        SentimentLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }
}
