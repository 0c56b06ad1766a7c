// Gestalt pattern matching (Ratcliff/Obershelp) similarity.
//
// Find the longest common block between two strings, then recurse on the
// unmatched regions to its left and right. The ratio is:
//
//   2 * M / (len_a + len_b)
//
// where M is the total size of all matched blocks. Matching follows the
// classic sequence matcher exactly, because the coverage threshold was tuned
// against it: ties go to the earliest block in `a`, then in `b`, and once `b`
// is 200+ characters long, characters that make up more than 1% of it are
// "popular" and cannot seed a match (they can still extend one).

use std::collections::HashMap;

/// Below this length of `b`, no character is treated as popular.
const POPULAR_MIN_LEN: usize = 200;

/// A run of `size` equal characters starting at `a` in the first string and
/// `b` in the second. Offsets count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Similarity ratio of two strings, from 0.0 (nothing in common) to 1.0.
///
/// Two empty strings are identical and score 1.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = SequenceMatcher::new(&a, &b)
        .matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum();

    2.0 * matched as f64 / total as f64
}

/// The matched blocks between two strings, ordered by position.
///
/// Adjacent blocks are merged, so no two returned blocks touch.
pub fn matching_blocks(a: &str, b: &str) -> Vec<MatchingBlock> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let blocks = SequenceMatcher::new(&a, &b).matching_blocks();

    let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(prev) if prev.a + prev.size == block.a && prev.b + prev.size == block.b => {
                prev.size += block.size;
            }
            _ => merged.push(block),
        }
    }
    merged
}

struct SequenceMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of each (non-popular) character of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'s> SequenceMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns a zero-size block at `(alo, blo)` when nothing matches.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock {
            a: alo,
            b: blo,
            size: 0,
        };

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best.size {
                        best = MatchingBlock {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular characters never seed a match, but they may extend one
        while best.a > alo && best.b > blo && self.a[best.a - 1] == self.b[best.b - 1] {
            best.a -= 1;
            best.b -= 1;
            best.size += 1;
        }
        while best.a + best.size < ahi
            && best.b + best.size < bhi
            && self.a[best.a + best.size] == self.b[best.b + best.size]
        {
            best.size += 1;
        }

        best
    }

    fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a && blo < block.b {
                pending.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a, block.b));
        blocks
    }
}
