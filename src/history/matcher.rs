use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Ranks history entries against what is currently typed
pub struct HistoryMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for HistoryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryMatcher").finish_non_exhaustive()
    }
}

impl Default for HistoryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Indices of entries matching `input`, best first
    ///
    /// Whitespace-separated terms must all match. Entries equal to the input are
    /// left out. Ties keep history order, so recent entries win.
    pub fn rank(&self, input: &str, entries: &[String]) -> Vec<usize> {
        let input = input.trim();
        let terms: Vec<&str> = input.split_whitespace().collect();

        if terms.is_empty() {
            return (0..entries.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.as_str() != input)
            .filter_map(|(idx, entry)| {
                terms
                    .iter()
                    .try_fold(0i64, |total, term| {
                        self.matcher.fuzzy_match(entry, term).map(|s| total + s)
                    })
                    .map(|score| (idx, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
