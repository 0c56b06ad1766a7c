// Comparative analysis: the engine that diffs a batch of articles.
//
// Three passes over the same input, merged into one report:
//   1. sentiment distribution (per-label counts)
//   2. coverage differences (every unordered pair of summaries)
//   3. topic overlap (common / unique topics accumulated across all pairs)
//
// The pair passes are a single fold over (i, j) index pairs in visiting order,
// threading the difference list and the two topic accumulators.

pub mod coverage;
pub mod distribution;
pub mod overlap;
pub mod report;
pub mod similarity;

use tracing::{debug, info};

use crate::articles::models::ArticleRecord;
use coverage::compare_summaries;
use overlap::TopicAccumulator;
use report::{ComparativeReport, CoverageDifference};

/// Tunables for the pairwise summary comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareOptions {
    /// Pairs whose similarity ratio is below this are reported (default 0.7)
    pub similarity_threshold: f64,
    /// How many characters of each summary a difference quotes (default 50)
    pub preview_chars: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            preview_chars: 50,
        }
    }
}

/// Every unordered index pair `(i, j)` with `i < j < n`, i ascending then j.
pub fn index_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Build the comparative report for an ordered batch of articles.
pub fn compare(articles: &[ArticleRecord], options: &CompareOptions) -> ComparativeReport {
    let sentiment_distribution = distribution::sentiment_distribution(articles);

    let (differences, topics) = index_pairs(articles.len()).fold(
        (Vec::<CoverageDifference>::new(), TopicAccumulator::default()),
        |(mut differences, mut topics), (i, j)| {
            let (first, second) = (&articles[i], &articles[j]);

            if let Some(difference) =
                compare_summaries(&first.summary, &second.summary, i, j, options)
            {
                debug!(first = i + 1, second = j + 1, "Coverage difference");
                differences.push(difference);
            }
            topics.add_pair(&first.topics, &second.topics);

            (differences, topics)
        },
    );

    info!(
        articles = articles.len(),
        differences = differences.len(),
        labels = sentiment_distribution.len(),
        "Comparative analysis complete"
    );

    ComparativeReport::assemble(sentiment_distribution, differences, topics.finish())
}
