//! Symbol frequency analysis.
//!
//! A [`FrequencyTable`] is the only input the tree builder needs. Entries keep
//! the order in which their symbols were first seen, which makes the tree
//! built from a table reproducible: the same table always yields the same
//! codes, and the packed layout can persist the table instead of the tree.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::Symbol;

/// Occurrence counts for each distinct symbol, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count every symbol in `symbols` with a single scan.
    pub fn from_symbols(symbols: &[S]) -> Self {
        let mut index: HashMap<&S, usize> = HashMap::new();
        let mut entries: Vec<(S, u64)> = Vec::new();

        for symbol in symbols {
            match index.get(symbol) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(symbol, entries.len());
                    entries.push((symbol.clone(), 1));
                }
            }
        }

        Self { entries }
    }

    /// Build a table from explicit `(symbol, weight)` pairs, keeping their order.
    ///
    /// # Errors
    /// Returns `Error::InvalidFrequencyTable` if a weight is zero or a symbol
    /// appears twice.
    pub fn from_weights<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (symbol, weight) in weights {
            if weight == 0 {
                return Err(Error::InvalidFrequencyTable(format!(
                    "symbol {:?} has zero weight",
                    symbol
                )));
            }
            if !seen.insert(symbol.clone()) {
                return Err(Error::InvalidFrequencyTable(format!(
                    "symbol {:?} listed more than once",
                    symbol
                )));
            }
            entries.push((symbol, weight));
        }

        Ok(Self { entries })
    }

    /// Occurrence count of `symbol`, if it was seen at all.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|&(_, weight)| weight)
    }
}

impl<S> FrequencyTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when built from empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(symbol, weight)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(symbol, weight)| (symbol, *weight))
    }

    /// Sum of all weights, i.e. the length of the scanned input.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, weight)| weight).sum()
    }
}

impl<S> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}
