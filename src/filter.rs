//! Case-insensitive removal of excluded words.
use std::collections::HashSet;

use tracing::{debug, info};

use crate::table::WordTable;

/// Immutable set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl ExclusionSet {
    /// Build a set from `words`, lowercasing each entry.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Whether `word`, lowercased, is in the set.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Return the rows of `table` whose word is not excluded, in their original
/// order.
pub fn filter(table: &WordTable, exclusions: &ExclusionSet) -> WordTable {
    let kept = table
        .records()
        .iter()
        .filter(|record| {
            let word = table.word(record);
            let excluded = exclusions.contains(word);
            if excluded {
                debug!(word, "excluded");
            }
            !excluded
        })
        .cloned()
        .collect::<Vec<_>>();
    info!(kept = kept.len(), removed = table.len() - kept.len(), "filtered word list");
    table.with_records(kept)
}
