// Article records: the processed articles the comparison engine consumes.
//
// The wire shape matches what the article pipeline has always produced:
// capitalized keys ("Title", "Summary", "Sentiment", "Topics"), with lowercase
// keys accepted as aliases. Missing or null fields fall back to empty values
// instead of failing the whole batch.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// One processed article: its title, summary, sentiment label and topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(rename = "Title", alias = "title", default, deserialize_with = "null_as_default")]
    pub title: String,
    /// May be empty when the summarizer produced nothing
    #[serde(rename = "Summary", alias = "summary", default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Lowercase sentiment label; empty when the article was never scored
    #[serde(rename = "Sentiment", alias = "sentiment", default, deserialize_with = "lowercase_label")]
    pub sentiment: String,
    #[serde(rename = "Topics", alias = "topics", default, deserialize_with = "null_as_default")]
    pub topics: BTreeSet<String>,
}

impl ArticleRecord {
    /// Build a record, lowercasing the sentiment label.
    pub fn new<I, S>(title: &str, summary: &str, sentiment: &str, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            summary: summary.to_string(),
            sentiment: sentiment.to_lowercase(),
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_summary(&self) -> bool {
        !self.summary.is_empty()
    }

    pub fn has_sentiment(&self) -> bool {
        !self.sentiment.is_empty()
    }
}

/// A batch of articles read from an input document, with the company name
/// when the document carries one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleBatch {
    pub company: Option<String>,
    pub articles: Vec<ArticleRecord>,
}

/// Accepted input layouts: a bare array of records, or an object that holds
/// them under "Articles" (the shape of a full company report).
#[derive(Deserialize)]
#[serde(untagged)]
enum ArticleDocument {
    Bare(Vec<ArticleRecord>),
    Wrapped {
        #[serde(rename = "Company", alias = "company", default)]
        company: Option<String>,
        #[serde(rename = "Articles", alias = "articles")]
        articles: Vec<ArticleRecord>,
    },
}

impl ArticleBatch {
    /// Parse a batch from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ArticleDocument = serde_json::from_str(json).context(
            "Expected a JSON array of articles or an object with an \"Articles\" array",
        )?;

        Ok(match document {
            ArticleDocument::Bare(articles) => Self {
                company: None,
                articles,
            },
            ArticleDocument::Wrapped { company, articles } => Self {
                company: company.filter(|c| !c.trim().is_empty()),
                articles,
            },
        })
    }

    /// Read and parse a batch from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read articles from {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse articles in {}", path.display()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lowercase_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let label: String = null_as_default(deserializer)?;
    Ok(label.to_lowercase())
}
