// Topic overlap accumulated across article pairs.
//
// Each pair contributes its intersection to the "common" accumulator and both
// one-sided differences to the "unique" accumulator. The accumulators are
// global, so a topic that is unique in one pair and shared in another lands in
// both. Consumers of existing reports depend on that, so the two sets are
// never reconciled.

use std::collections::BTreeSet;

use super::report::TopicOverlap;

/// How two articles' topic sets relate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairTopics {
    pub common: BTreeSet<String>,
    pub only_first: BTreeSet<String>,
    pub only_second: BTreeSet<String>,
}

/// Split two topic sets into shared and one-sided topics.
pub fn compare_topics(first: &BTreeSet<String>, second: &BTreeSet<String>) -> PairTopics {
    PairTopics {
        common: first.intersection(second).cloned().collect(),
        only_first: first.difference(second).cloned().collect(),
        only_second: second.difference(first).cloned().collect(),
    }
}

/// Running union of common and unique topics over every visited pair.
#[derive(Debug, Clone, Default)]
pub struct TopicAccumulator {
    common: BTreeSet<String>,
    unique: BTreeSet<String>,
}

impl TopicAccumulator {
    /// Fold one pair's topic comparison into the accumulators.
    pub fn add_pair(&mut self, first: &BTreeSet<String>, second: &BTreeSet<String>) {
        let pair = compare_topics(first, second);
        self.common.extend(pair.common);
        self.unique.extend(pair.only_first);
        self.unique.extend(pair.only_second);
    }

    /// Materialize the overlap; an empty accumulator becomes `{"None"}`.
    pub fn finish(self) -> TopicOverlap {
        TopicOverlap {
            common_topics: or_none(self.common),
            unique_topics: or_none(self.unique),
        }
    }
}

/// Placeholder entry for an empty topic set.
pub const NO_TOPICS: &str = "None";

fn or_none(topics: BTreeSet<String>) -> BTreeSet<String> {
    if topics.is_empty() {
        BTreeSet::from([NO_TOPICS.to_string()])
    } else {
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compare_topics() {
        let pair = compare_topics(&set(&["A", "B"]), &set(&["B", "C"]));
        assert_eq!(pair.common, set(&["B"]));
        assert_eq!(pair.only_first, set(&["A"]));
        assert_eq!(pair.only_second, set(&["C"]));
    }

    #[test]
    fn test_empty_accumulator_yields_none() {
        let overlap = TopicAccumulator::default().finish();
        assert_eq!(overlap.common_topics, set(&["None"]));
        assert_eq!(overlap.unique_topics, set(&["None"]));
    }

    #[test]
    fn test_topic_can_be_common_and_unique() {
        let mut acc = TopicAccumulator::default();
        acc.add_pair(&set(&["Tech"]), &set(&["Tech"]));
        acc.add_pair(&set(&["Tech"]), &set(&["Finance"]));

        let overlap = acc.finish();
        assert_eq!(overlap.common_topics, set(&["Tech"]));
        assert_eq!(overlap.unique_topics, set(&["Finance", "Tech"]));
    }

    #[test]
    fn test_identical_sets_leave_unique_empty() {
        let mut acc = TopicAccumulator::default();
        acc.add_pair(&set(&["A", "B"]), &set(&["A", "B"]));

        let overlap = acc.finish();
        assert_eq!(overlap.common_topics, set(&["A", "B"]));
        assert_eq!(overlap.unique_topics, set(&["None"]));
    }
}
