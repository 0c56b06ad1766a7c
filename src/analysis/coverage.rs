// Pairwise coverage differences between article summaries.

use super::report::CoverageDifference;
use super::similarity;
use super::CompareOptions;

/// Impact text attached to every reported difference.
pub const DIFFERENCE_IMPACT: &str =
    "Potential impact on public perception due to differences in focus.";

/// Compare the summaries of articles `i` and `j` (0-based positions).
///
/// A missing summary on either side always counts as a difference. Otherwise
/// the pair is reported when the similarity ratio falls below the threshold,
/// quoting the start of each summary.
pub fn compare_summaries(
    first: &str,
    second: &str,
    i: usize,
    j: usize,
    options: &CompareOptions,
) -> Option<CoverageDifference> {
    if first.is_empty() || second.is_empty() {
        return Some(CoverageDifference::new(
            format!("Article {} or {} has no summary.", i + 1, j + 1),
            DIFFERENCE_IMPACT,
        ));
    }

    let ratio = similarity::ratio(first, second);
    if ratio >= options.similarity_threshold {
        return None;
    }

    Some(CoverageDifference::new(
        format!(
            "Article {}: {}... vs. Article {}: {}...",
            i + 1,
            preview(first, options.preview_chars),
            j + 1,
            preview(second, options.preview_chars),
        ),
        DIFFERENCE_IMPACT,
    ))
}

/// The first `max_chars` characters of `text` (all of it if shorter).
///
/// Counts characters rather than bytes so multi-byte text never splits.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
