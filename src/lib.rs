//! Lexicon-based sentiment triage for short comments.
//!
//! Raw text is normalized into tokens, scored against a polarity lexicon,
//! thresholded into a [`SentimentLabel`] and rolled up into a [`BatchSummary`].
//!
//! ```
//! use comment_sentiment::{AnalyzerConfig, SentimentAnalyzer, SentimentLabel};
//!
//! let analyzer = SentimentAnalyzer::new(&AnalyzerConfig::default()).unwrap();
//! assert_eq!(analyzer.classify_text("This is terrible, I hate it."), SentimentLabel::Negative);
//! ```
pub mod config;
pub mod error;
pub mod nlp;
pub mod report;

pub use config::AnalyzerConfig;
pub use error::{Result, SentimentError};
pub use nlp::{
    AnalysisResult, BatchSummary, CompoundScore, LanguageResources, ResourceSource,
    ScoringParams, SentimentAnalyzer, SentimentLabel, Thresholds, TokenStream,
};
