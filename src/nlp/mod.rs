// NLP module for comment sentiment triage
pub mod classifier;
pub mod normalizer;
pub mod resources;
pub mod scorer;
pub mod sentiment;
pub mod summary;

pub use classifier::{SentimentLabel, Thresholds};
pub use normalizer::{Normalizer, TokenStream};
pub use resources::{LanguageResources, ResourceSource};
pub use scorer::{CompoundScore, LexiconScorer, ScoringParams};
pub use sentiment::{AnalysisResult, SentimentAnalyzer};
pub use summary::BatchSummary;
