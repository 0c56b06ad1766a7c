// Per-article processing: summarize, score, and shape into an ArticleRecord.
//
// Library entry points for a serving layer that owns the summarization model
// and polarity scorer; the CLI reads already-processed articles instead.

use tracing::{debug, warn};

use super::traits::{PolarityScorer, Summarizer};
use crate::articles::ingest::title_from_line;
use crate::articles::models::ArticleRecord;
use crate::sentiment::Sentiment;
use crate::topics::FALLBACK_TOPIC;

/// Summary used when an article has no content at all.
pub const EMPTY_CONTENT_SUMMARY: &str = "No content to summarize.";
/// Summary used when the summarizer fails.
pub const FAILED_SUMMARY: &str = "Error occurred during summarization.";

const UNTITLED: &str = "No title available.";
const NO_CONTENT: &str = "No content available.";

/// An article as the news search returns it, before processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawArticle {
    /// A single "Title: description" line
    Line(String),
    /// Structured fields, any of which may be missing
    Fields {
        title: Option<String>,
        content: Option<String>,
        topics: Option<Vec<String>>,
    },
}

impl RawArticle {
    fn title(&self) -> String {
        match self {
            RawArticle::Line(line) => title_from_line(line).to_string(),
            RawArticle::Fields { title, .. } => {
                title.clone().unwrap_or_else(|| UNTITLED.to_string())
            }
        }
    }

    fn content(&self) -> &str {
        match self {
            RawArticle::Line(line) => line,
            RawArticle::Fields { content, .. } => content.as_deref().unwrap_or(NO_CONTENT),
        }
    }

    fn topics(&self) -> Vec<String> {
        match self {
            RawArticle::Fields {
                topics: Some(topics),
                ..
            } => topics.clone(),
            _ => vec![FALLBACK_TOPIC.to_string()],
        }
    }
}

/// Summarize and score one raw article.
///
/// Never fails: summarizer errors become a placeholder summary and scorer
/// errors leave the article neutral.
pub fn process_article(
    raw: &RawArticle,
    summarizer: &dyn Summarizer,
    scorer: &dyn PolarityScorer,
) -> ArticleRecord {
    let title = raw.title();
    let summary = summarize(raw.content(), summarizer);
    let sentiment = score(&summary, scorer);
    debug!(title = %title, sentiment = %sentiment, "Processed article");

    ArticleRecord::new(&title, &summary, sentiment.as_str(), raw.topics())
}

/// Process a batch of raw articles, keeping their order.
pub fn process_articles(
    raws: &[RawArticle],
    summarizer: &dyn Summarizer,
    scorer: &dyn PolarityScorer,
) -> Vec<ArticleRecord> {
    raws.iter()
        .map(|raw| process_article(raw, summarizer, scorer))
        .collect()
}

fn summarize(content: &str, summarizer: &dyn Summarizer) -> String {
    if content.trim().is_empty() {
        return EMPTY_CONTENT_SUMMARY.to_string();
    }
    match summarizer.summarize(content) {
        Ok(summary) => summary,
        Err(e) => {
            warn!(error = %e, "Summarization failed, using placeholder");
            FAILED_SUMMARY.to_string()
        }
    }
}

fn score(summary: &str, scorer: &dyn PolarityScorer) -> Sentiment {
    if summary.trim().is_empty() {
        return Sentiment::Neutral;
    }
    match scorer.polarity(summary) {
        Ok(polarity) => Sentiment::from_polarity(polarity),
        Err(e) => {
            warn!(error = %e, "Polarity scoring failed, treating as neutral");
            Sentiment::Neutral
        }
    }
}
