// Topic extraction: fills in topics for articles that arrive without any.
//
// Topics normally come from the article pipeline. When they are missing, a
// TF-IDF pass over the batch supplies them so topic overlap still has
// something to compare.

pub mod tfidf;
pub mod traits;

use anyhow::Result;
use tracing::info;

use crate::articles::models::ArticleRecord;
use traits::TopicExtractor;

/// Topic assigned to an article none of the extracted keywords match.
pub const FALLBACK_TOPIC: &str = "General";

/// Extract topics for every article whose topic set is empty.
///
/// Extraction runs over the whole batch (so keyword weights reflect all the
/// coverage), but only empty topic sets are overwritten. Returns how many
/// articles were filled.
pub fn fill_missing_topics(
    articles: &mut [ArticleRecord],
    extractor: &dyn TopicExtractor,
) -> Result<usize> {
    if articles.iter().all(|a| !a.topics.is_empty()) {
        return Ok(0);
    }

    let texts: Vec<String> = articles.iter().map(topic_text).collect();
    let extracted = extractor.extract(&texts)?;

    let mut filled = 0;
    for (article, topics) in articles.iter_mut().zip(extracted) {
        if article.topics.is_empty() {
            article.topics = topics;
            filled += 1;
        }
    }

    info!(filled, total = articles.len(), "Filled missing article topics");
    Ok(filled)
}

/// The text topics are drawn from: the summary, or the title without one.
fn topic_text(article: &ArticleRecord) -> String {
    if article.has_summary() {
        article.summary.clone()
    } else {
        article.title.clone()
    }
}
