// TF-IDF topic extraction.
//
// Uses the `keyword_extraction` crate with each article as a separate
// document: words common to every article get downweighted, words distinctive
// to some articles get boosted. The top-ranked keywords are then handed back
// to the articles that mention them as whole words.

use std::collections::BTreeSet;

use anyhow::Result;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

use super::traits::TopicExtractor;
use super::FALLBACK_TOPIC;

/// TF-IDF based topic extractor.
///
/// Runs locally with no model or API calls.
pub struct TfIdfExtractor {
    /// How many top keywords to rank across the whole batch
    pub top_n_keywords: usize,
    /// Most topics any single article receives
    pub max_topics_per_article: usize,
}

impl Default for TfIdfExtractor {
    fn default() -> Self {
        Self {
            top_n_keywords: 40,
            max_topics_per_article: 5,
        }
    }
}

impl TopicExtractor for TfIdfExtractor {
    fn extract(&self, texts: &[String]) -> Result<Vec<BTreeSet<String>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);
        let params = TfIdfParams::UnprocessedDocuments(texts, &stop_words, None);
        let tfidf = TfIdf::new(params);

        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(self.top_n_keywords);
        if let Some((top_keyword, top_score)) = ranked.first() {
            info!(
                keywords = ranked.len(),
                top_keyword = top_keyword.as_str(),
                top_score = *top_score,
                "Extracted TF-IDF keywords"
            );
        } else {
            debug!(documents = texts.len(), "TF-IDF produced no keywords");
        }

        let matchers = ranked
            .iter()
            .map(|(keyword, _)| KeywordMatcher::new(keyword))
            .collect::<Result<Vec<_>>>()?;

        Ok(texts
            .iter()
            .map(|text| self.topics_for(&text.to_lowercase(), &matchers))
            .collect())
    }
}

/// A ranked keyword and the pattern that finds it in lowercased text.
struct KeywordMatcher {
    keyword: String,
    pattern: Regex,
}

impl KeywordMatcher {
    fn new(keyword: &str) -> Result<Self> {
        let keyword = keyword.to_lowercase();
        let pattern = Regex::new(&regex_lite::escape(&keyword))?;
        Ok(Self { keyword, pattern })
    }

    /// Whether the keyword occurs in `text` as a whole word.
    ///
    /// regex-lite's `\b` only knows ASCII word characters, so boundaries are
    /// checked here against Unicode letters and digits instead.
    fn occurs_in(&self, text: &str) -> bool {
        self.pattern.find_iter(text).any(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl TfIdfExtractor {
    /// Pick the highest-ranked keywords that appear in `lower`.
    fn topics_for(&self, lower: &str, matchers: &[KeywordMatcher]) -> BTreeSet<String> {
        let topics: BTreeSet<String> = matchers
            .iter()
            .filter(|m| m.occurs_in(lower))
            .take(self.max_topics_per_article)
            .map(|m| m.keyword.clone())
            .collect();

        if topics.is_empty() {
            BTreeSet::from([FALLBACK_TOPIC.to_string()])
        } else {
            topics
        }
    }
}
