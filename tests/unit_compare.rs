// Unit tests for the comparative analysis engine.
//
// Covers the report invariants (sentinel entry, "None" topic placeholders,
// pair counts, distribution totals) and the documented scenarios.

use std::collections::BTreeSet;

use newsdiff::analysis::coverage::DIFFERENCE_IMPACT;
use newsdiff::analysis::report::{CoverageDifference, NEUTRAL_IMPACT, NO_DIFFERENCES};
use newsdiff::analysis::{compare, index_pairs, CompareOptions};
use newsdiff::articles::models::ArticleRecord;

fn article(summary: &str, sentiment: &str, topics: &[&str]) -> ArticleRecord {
    ArticleRecord::new("Title", summary, sentiment, topics.iter().copied())
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sentinel() -> Vec<CoverageDifference> {
    vec![CoverageDifference::new(NO_DIFFERENCES, NEUTRAL_IMPACT)]
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn empty_input() {
    let report = compare(&[], &CompareOptions::default());
    assert!(report.sentiment_distribution.is_empty());
    assert_eq!(report.coverage_differences, sentinel());
    assert_eq!(report.topic_overlap.common_topics, set(&["None"]));
    assert_eq!(report.topic_overlap.unique_topics, set(&["None"]));
}

#[test]
fn single_article_has_no_pairs() {
    let articles = vec![article("Only one", "positive", &["Tech"])];
    let report = compare(&articles, &CompareOptions::default());
    assert_eq!(report.sentiment_distribution.get("positive"), Some(&1));
    assert_eq!(report.coverage_differences, sentinel());
    assert_eq!(report.topic_overlap.common_topics, set(&["None"]));
    assert_eq!(report.topic_overlap.unique_topics, set(&["None"]));
}

#[test]
fn identical_summaries_yield_sentinel() {
    let summary = "Nvidia stock hit a record high on strong AI chip demand.";
    let articles = vec![
        article(summary, "positive", &[]),
        article(summary, "positive", &[]),
    ];
    let report = compare(&articles, &CompareOptions::default());
    assert_eq!(report.coverage_differences, sentinel());
}

#[test]
fn empty_summary_is_a_difference() {
    let articles = vec![
        article("Nvidia stock hit a record high.", "positive", &[]),
        article("", "neutral", &[]),
    ];
    let report = compare(&articles, &CompareOptions::default());
    assert_eq!(
        report.coverage_differences,
        vec![CoverageDifference::new(
            "Article 1 or 2 has no summary.",
            DIFFERENCE_IMPACT
        )]
    );
}

#[test]
fn three_article_topic_accumulation() {
    let articles = vec![
        article("s1", "", &["A", "B"]),
        article("s2", "", &["B", "C"]),
        article("s3", "", &["D"]),
    ];
    let report = compare(&articles, &CompareOptions::default());

    // (1,2): common {B}, unique {A} + {C}
    // (1,3): common {},  unique {A,B} + {D}
    // (2,3): common {},  unique {B,C} + {D}
    assert_eq!(report.topic_overlap.common_topics, set(&["B"]));
    assert_eq!(report.topic_overlap.unique_topics, set(&["A", "B", "C", "D"]));
}

#[test]
fn no_shared_or_unique_topics_gives_none() {
    let articles = vec![article("s1", "", &[]), article("s2", "", &[])];
    let report = compare(&articles, &CompareOptions::default());
    assert_eq!(report.topic_overlap.common_topics, set(&["None"]));
    assert_eq!(report.topic_overlap.unique_topics, set(&["None"]));
}

// ============================================================
// Ordering and thresholds
// ============================================================

#[test]
fn differences_follow_pair_order() {
    let articles = vec![
        article("aaaaaaaaaa", "", &[]),
        article("bbbbbbbbbb", "", &[]),
        article("", "", &[]),
    ];
    let report = compare(&articles, &CompareOptions::default());
    let comparisons: Vec<&str> = report
        .coverage_differences
        .iter()
        .map(|d| d.comparison.as_str())
        .collect();
    assert_eq!(
        comparisons,
        vec![
            "Article 1: aaaaaaaaaa... vs. Article 2: bbbbbbbbbb...",
            "Article 1 or 3 has no summary.",
            "Article 2 or 3 has no summary.",
        ]
    );
}

#[test]
fn ratio_exactly_at_threshold_is_not_reported() {
    // ratio("abcdefghij", "abcdefgxyz") == 0.7
    let at = vec![article("abcdefghij", "", &[]), article("abcdefgxyz", "", &[])];
    assert_eq!(
        compare(&at, &CompareOptions::default()).coverage_differences,
        sentinel()
    );

    // ratio 0.6
    let below = vec![article("abcdefghij", "", &[]), article("abcdefxyzw", "", &[])];
    assert_eq!(
        compare(&below, &CompareOptions::default()).difference_count(),
        1
    );
}

#[test]
fn preview_truncates_to_fifty_characters() {
    let long_a = "A".repeat(80);
    let long_b = "B".repeat(3);
    let articles = vec![article(&long_a, "", &[]), article(&long_b, "", &[])];
    let report = compare(&articles, &CompareOptions::default());
    assert_eq!(
        report.coverage_differences[0].comparison,
        format!("Article 1: {}... vs. Article 2: BBB...", "A".repeat(50))
    );
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn distribution_total_matches_scored_articles() {
    let articles = vec![
        article("s", "Positive", &[]),
        article("s", "", &[]),
        article("s", "negative", &[]),
        article("s", "NEUTRAL", &[]),
        article("s", "positive", &[]),
    ];
    let report = compare(&articles, &CompareOptions::default());
    let total: usize = report.sentiment_distribution.values().sum();
    assert_eq!(total, articles.iter().filter(|a| a.has_sentiment()).count());
    assert_eq!(report.sentiment_distribution.get("positive"), Some(&2));
    assert_eq!(report.sentiment_distribution.get("neutral"), Some(&1));
}

#[test]
fn every_pair_is_visited_once() {
    for n in 0..7 {
        let pairs: Vec<_> = index_pairs(n).collect();
        assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2);
        assert!(pairs.iter().all(|&(i, j)| i < j && j < n));

        // With every summary missing, every pair is a difference
        let articles: Vec<_> = (0..n).map(|_| article("", "", &[])).collect();
        let report = compare(&articles, &CompareOptions::default());
        if pairs.is_empty() {
            assert_eq!(report.coverage_differences, sentinel());
        } else {
            assert_eq!(report.coverage_differences.len(), pairs.len());
            assert_eq!(report.difference_count(), pairs.len());
        }
    }
}

#[test]
fn report_is_deterministic() {
    let articles = vec![
        article("Shares fell after the recall.", "negative", &["Recall", "Stocks"]),
        article("Deliveries beat expectations.", "positive", &["Stocks", "Sales"]),
        article("A new factory opens in Berlin.", "neutral", &["Manufacturing"]),
    ];
    let first = compare(&articles, &CompareOptions::default());
    let second = compare(&articles, &CompareOptions::default());
    assert_eq!(first, second);
}
