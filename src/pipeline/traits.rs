// Collaborator traits: the swap-ready seams for the summarization model and
// the polarity scorer. Neither is implemented in this crate.

use anyhow::Result;

/// Condenses article content into a short summary.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<String>;
}

/// Scores text polarity from -1.0 (very negative) to 1.0 (very positive).
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> Result<f64>;
}
