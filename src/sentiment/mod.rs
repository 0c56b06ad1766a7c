// Sentiment labels: polarity classification and the overall verdict.
//
// The polarity scorer itself is an external collaborator (see
// `pipeline::traits::PolarityScorer`). This module only turns its scores into
// labels and turns a batch's label counts into a one-line verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::distribution::SentimentDistribution;

/// Polarity strictly inside (-NEUTRAL_BAND, NEUTRAL_BAND) counts as neutral.
pub const NEUTRAL_BAND: f64 = 0.05;

/// The sentiment labels the pipeline assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a polarity score in [-1.0, 1.0].
    pub fn from_polarity(polarity: f64) -> Self {
        match polarity {
            p if p > -NEUTRAL_BAND && p < NEUTRAL_BAND => Sentiment::Neutral,
            p if p > 0.0 => Sentiment::Positive,
            _ => Sentiment::Negative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One-sentence summary of how a company's coverage leans.
///
/// Only positive vs. negative counts decide it; a tie (including no scored
/// articles at all) reads as neutral.
pub fn verdict(company: &str, distribution: &SentimentDistribution) -> String {
    let count = |s: Sentiment| distribution.get(s.as_str()).copied().unwrap_or(0);
    let positive = count(Sentiment::Positive);
    let negative = count(Sentiment::Negative);

    if positive > negative {
        format!("{company}’s latest news coverage is mostly positive.")
    } else if negative > positive {
        format!("{company}’s recent news coverage raises concerns about regulatory hurdles.")
    } else {
        format!("{company}’s latest news reflects a neutral sentiment.")
    }
}
