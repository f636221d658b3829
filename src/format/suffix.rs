//! Magnitude suffixes for the compact format.

use crate::config::SuffixLabels;

/// A magnitude threshold and the label shown for values at or above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixEntry {
    threshold: u64,
    label: String,
}

impl SuffixEntry {
    /// Create a suffix entry.
    pub fn new(threshold: u64, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }

    /// Smallest value this entry applies to.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Label appended to abbreviated values.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The five suffix entries, ordered by descending threshold.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    entries: [SuffixEntry; 5],
}

impl SuffixTable {
    /// Smallest value that gets a suffix.
    pub const MIN_THRESHOLD: u64 = 1_000;

    /// Build the table from configured labels.
    pub fn new(labels: &SuffixLabels) -> Self {
        let labels = labels.resolved();
        Self {
            entries: [
                SuffixEntry::new(1_000_000_000_000_000, labels.quadrillions),
                SuffixEntry::new(1_000_000_000_000, labels.trillions),
                SuffixEntry::new(1_000_000_000, labels.billions),
                SuffixEntry::new(1_000_000, labels.millions),
                SuffixEntry::new(Self::MIN_THRESHOLD, labels.thousands),
            ],
        }
    }

    /// Entry with the largest threshold not above `value`.
    ///
    /// Returns `None` below [`Self::MIN_THRESHOLD`].
    pub fn lookup(&self, value: u64) -> Option<&SuffixEntry> {
        self.entries.iter().find(|entry| value >= entry.threshold)
    }

    /// Entries in descending threshold order.
    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::new(&SuffixLabels::default())
    }
}
