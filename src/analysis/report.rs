// Report types: the comparative report and the company report envelope.
//
// Field names serialize exactly as existing consumers expect them
// (capitalized, space-separated). Sets serialize as sorted arrays.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::distribution::SentimentDistribution;
use super::CompareOptions;
use crate::articles::models::ArticleRecord;

/// Comparison text of the entry used when no pair differs.
pub const NO_DIFFERENCES: &str = "No major differences found.";
/// Impact text of the entry used when no pair differs.
pub const NEUTRAL_IMPACT: &str = "Neutral coverage.";

/// The structured diff across one batch of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeReport {
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: SentimentDistribution,
    /// Never empty: holds a single "no differences" entry when nothing differs
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<CoverageDifference>,
    #[serde(rename = "Topic Overlap")]
    pub topic_overlap: TopicOverlap,
}

/// One pair of articles whose coverage diverges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDifference {
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

/// Topics shared by, and unique to, article pairs across the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicOverlap {
    #[serde(rename = "Common Topics")]
    pub common_topics: BTreeSet<String>,
    #[serde(rename = "Unique Topics")]
    pub unique_topics: BTreeSet<String>,
}

impl CoverageDifference {
    pub fn new(comparison: impl Into<String>, impact: impl Into<String>) -> Self {
        Self {
            comparison: comparison.into(),
            impact: impact.into(),
        }
    }

    /// The entry reported when no article pair differs.
    pub fn no_differences() -> Self {
        Self::new(NO_DIFFERENCES, NEUTRAL_IMPACT)
    }

    pub fn is_no_differences(&self) -> bool {
        self.comparison == NO_DIFFERENCES && self.impact == NEUTRAL_IMPACT
    }
}

impl ComparativeReport {
    /// Combine the three analysis passes into one report.
    pub fn assemble(
        sentiment_distribution: SentimentDistribution,
        differences: Vec<CoverageDifference>,
        topic_overlap: TopicOverlap,
    ) -> Self {
        let coverage_differences = if differences.is_empty() {
            vec![CoverageDifference::no_differences()]
        } else {
            differences
        };

        Self {
            sentiment_distribution,
            coverage_differences,
            topic_overlap,
        }
    }

    /// Number of real differences (the "no differences" entry doesn't count).
    pub fn difference_count(&self) -> usize {
        self.coverage_differences
            .iter()
            .filter(|d| !d.is_no_differences())
            .count()
    }
}

/// Everything known about one company's coverage: the articles, their
/// comparison, and the one-line verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<ArticleRecord>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative: ComparativeReport,
    #[serde(rename = "Final Sentiment Analysis")]
    pub final_sentiment: String,
}

impl CompanyReport {
    /// Compare the articles and derive the verdict for `company`.
    pub fn build(company: &str, articles: Vec<ArticleRecord>, options: &CompareOptions) -> Self {
        let comparative = super::compare(&articles, options);
        let final_sentiment =
            crate::sentiment::verdict(company, &comparative.sentiment_distribution);

        Self {
            company: company.to_string(),
            articles,
            comparative,
            final_sentiment,
        }
    }
}
