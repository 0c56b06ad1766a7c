// Sentiment distribution: how many articles carry each sentiment label.

use std::collections::BTreeMap;

use crate::articles::models::ArticleRecord;

/// Label -> count. Only labels that occur are present.
pub type SentimentDistribution = BTreeMap<String, usize>;

/// Count sentiment labels across articles.
///
/// Articles without a sentiment are skipped entirely. Labels are lowercased
/// but otherwise counted verbatim, including ones we don't recognize.
pub fn sentiment_distribution(articles: &[ArticleRecord]) -> SentimentDistribution {
    let mut counts = SentimentDistribution::new();
    for article in articles.iter().filter(|a| a.has_sentiment()) {
        *counts.entry(article.sentiment.to_lowercase()).or_insert(0) += 1;
    }
    counts
}
