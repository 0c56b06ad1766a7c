// Topic extractor trait: swap-ready abstraction.
//
// The default implementation uses TF-IDF over the article batch. A model-based
// extractor can replace it without touching the comparison engine.

use std::collections::BTreeSet;

use anyhow::Result;

/// Trait for assigning topics to a batch of documents.
pub trait TopicExtractor {
    /// Produce one topic set per input text, in the same order.
    fn extract(&self, texts: &[String]) -> Result<Vec<BTreeSet<String>>>;
}
