//! Response tally: identifier -> number of rounds attributed to it.

use std::collections::HashMap;

use crate::DEFAULT_ERROR_KEY;

/// Per-run aggregation of observed instance identifiers.
///
/// Keys are identifiers read from the response header plus the error sentinel
/// for rounds that failed at the transport layer. Successful responses that
/// carried no identifier are not keyed; they are only counted in
/// [`Tally::unlabeled`], so `total() + unlabeled()` equals the number of
/// recorded rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<String, u64>,
    error_key: String,
    unlabeled: u64,
}

impl Default for Tally {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_KEY)
    }
}

impl Tally {
    pub fn new(error_key: impl Into<String>) -> Self {
        Self {
            counts: HashMap::new(),
            error_key: error_key.into(),
            unlabeled: 0,
        }
    }

    /// Record a successful round. Returns `false` when `key` is empty and the
    /// round was left out of the keyed counts.
    pub fn record(&mut self, key: &str) -> bool {
        if key.is_empty() {
            self.unlabeled += 1;
            return false;
        }
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
        true
    }

    /// Record a round that failed at the transport layer.
    pub fn record_error(&mut self) {
        *self.counts.entry(self.error_key.clone()).or_insert(0) += 1;
    }

    /// Count for `key`, zero when never observed.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    pub fn errors(&self) -> u64 {
        self.get(&self.error_key)
    }

    /// Sum over all keyed counts (error sentinel included).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Successful rounds dropped for carrying an empty identifier.
    pub fn unlabeled(&self) -> u64 {
        self.unlabeled
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keyed counts in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
