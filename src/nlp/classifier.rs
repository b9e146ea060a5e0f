// Threshold classification of compound scores into three sentiment labels.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::scorer::CompoundScore;
use crate::error::{Result, SentimentError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            _ => Err(SentimentError::UnknownLabel(s.to_string())),
        }
    }
}

/// Decision boundaries; scores between them fall in the neutral dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    positive: f32,
    negative: f32,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawThresholds {
    positive: f32,
    negative: f32,
}

impl Default for RawThresholds {
    fn default() -> Self {
        let t = Thresholds::default();
        Self {
            positive: t.positive,
            negative: t.negative,
        }
    }
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = SentimentError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Thresholds::new(raw.positive, raw.negative)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: 0.2,
            negative: -0.2,
        }
    }
}

impl Thresholds {
    pub fn new(positive: f32, negative: f32) -> Result<Self> {
        if !positive.is_finite() || !negative.is_finite() {
            return Err(SentimentError::InvalidThresholds(
                "thresholds must be finite".to_string(),
            ));
        }
        if !(-1.0..=1.0).contains(&positive) || !(-1.0..=1.0).contains(&negative) {
            return Err(SentimentError::InvalidThresholds(format!(
                "thresholds must lie in [-1, 1], got positive={} negative={}",
                positive, negative
            )));
        }
        if negative >= positive {
            return Err(SentimentError::InvalidThresholds(format!(
                "negative threshold {} must be below positive threshold {}",
                negative, positive
            )));
        }
        Ok(Self { positive, negative })
    }

    pub fn symmetric(bound: f32) -> Result<Self> {
        Self::new(bound.abs(), -bound.abs())
    }

    pub fn positive(&self) -> f32 {
        self.positive
    }

    pub fn negative(&self) -> f32 {
        self.negative
    }

    pub fn classify(&self, score: CompoundScore) -> SentimentLabel {
        let value = score.value();
        if value >= self.positive {
            SentimentLabel::Positive
        } else if value <= self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        let t = Thresholds::default();
        assert_eq!(t.classify(CompoundScore::new(0.2)), SentimentLabel::Positive);
        assert_eq!(t.classify(CompoundScore::new(-0.2)), SentimentLabel::Negative);
        assert_eq!(t.classify(CompoundScore::new(0.19999)), SentimentLabel::Neutral);
        assert_eq!(t.classify(CompoundScore::new(-0.19999)), SentimentLabel::Neutral);
        assert_eq!(t.classify(CompoundScore::new(0.0)), SentimentLabel::Neutral);
    }

    #[test]
    fn test_classify_extremes() {
        let t = Thresholds::default();
        assert_eq!(t.classify(CompoundScore::new(1.0)), SentimentLabel::Positive);
        assert_eq!(t.classify(CompoundScore::new(-1.0)), SentimentLabel::Negative);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds::symmetric(0.5).unwrap();
        assert_eq!(t.classify(CompoundScore::new(0.4)), SentimentLabel::Neutral);
        assert_eq!(t.classify(CompoundScore::new(0.5)), SentimentLabel::Positive);
        assert_eq!(t.classify(CompoundScore::new(-0.5)), SentimentLabel::Negative);
    }

    #[test]
    fn test_invalid_thresholds() {
        assert!(Thresholds::new(0.1, 0.3).is_err());
        assert!(Thresholds::new(0.2, 0.2).is_err());
        assert!(Thresholds::new(1.5, -0.2).is_err());
        assert!(Thresholds::new(f32::NAN, -0.2).is_err());
        assert!(Thresholds::symmetric(0.0).is_err());
    }

    #[test]
    fn test_thresholds_deserialize_validates() {
        let t: Thresholds = serde_json::from_str(r#"{"positive": 0.3}"#).unwrap();
        assert_eq!(t.positive(), 0.3);
        assert_eq!(t.negative(), -0.2);
        let bad: std::result::Result<Thresholds, _> =
            serde_json::from_str(r#"{"positive": -0.5, "negative": 0.5}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_label_parse_and_display() {
        assert_eq!("Positive".parse::<SentimentLabel>().unwrap(), SentimentLabel::Positive);
        assert_eq!(" neutral ".parse::<SentimentLabel>().unwrap(), SentimentLabel::Neutral);
        assert!("mixed".parse::<SentimentLabel>().is_err());
        assert_eq!(SentimentLabel::Negative.to_string(), "negative");
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
