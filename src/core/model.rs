//! Frequency table model
//!
//! Every report is rendered from a single `FrequencyTable` built during load.

use std::collections::BTreeMap;

/// Ordered item name -> occurrence count mapping.
///
/// Keys are stored exactly as read (case-sensitive) and iterate in
/// lexicographic order. A key only exists once it has been observed, so
/// every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `name`
    pub fn increment(&mut self, name: &str) {
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
            }
        }
    }

    /// Count for `name`, if it was ever observed
    pub fn lookup(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    /// Entries in ascending name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (number of tokens loaded)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for name in iter {
            table.increment(name.as_ref());
        }
        table
    }
}
