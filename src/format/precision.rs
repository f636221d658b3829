//! Fixed-precision formatting and the per-precision cache.

use std::sync::Arc;

use dashmap::DashMap;

use super::convention::{non_finite, FixedDigits, MAX_FRACTION_DIGITS};

/// Formats values with at most a fixed number of fractional digits.
///
/// No grouping separators are inserted and trailing zeros are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionFormatter {
    max_fraction_digits: usize,
    decimal_separator: char,
}

impl PrecisionFormatter {
    /// Create a formatter; requests above 340 digits are capped.
    pub fn new(max_fraction_digits: usize, decimal_separator: char) -> Self {
        Self {
            max_fraction_digits: max_fraction_digits.min(MAX_FRACTION_DIGITS),
            decimal_separator,
        }
    }

    /// Maximum number of fractional digits emitted.
    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    /// Format a value.
    pub fn format(&self, value: f64) -> String {
        if let Some(text) = non_finite(value) {
            return text.to_string();
        }

        let digits = FixedDigits::new(value, self.max_fraction_digits);
        let mut result = String::with_capacity(digits.integer.len() + digits.fraction.len() + 2);
        if digits.negative {
            result.push('-');
        }
        result.push_str(&digits.integer);
        if !digits.fraction.is_empty() {
            result.push(self.decimal_separator);
            result.push_str(&digits.fraction);
        }
        result
    }
}

/// Lazily built formatters, one per requested precision.
#[derive(Debug)]
pub struct PrecisionCache {
    decimal_separator: char,
    formatters: DashMap<usize, Arc<PrecisionFormatter>>,
}

impl PrecisionCache {
    /// Create an empty cache whose formatters use `decimal_separator`.
    pub fn new(decimal_separator: char) -> Self {
        Self {
            decimal_separator,
            formatters: DashMap::new(),
        }
    }

    /// Get the formatter for `precision`, building it on first use.
    pub fn get(&self, precision: usize) -> Arc<PrecisionFormatter> {
        self.formatters
            .entry(precision)
            .or_insert_with(|| {
                tracing::trace!(precision, "building precision formatter");
                Arc::new(PrecisionFormatter::new(precision, self.decimal_separator))
            })
            .value()
            .clone()
    }

    /// Number of cached formatters.
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    /// Check if no formatter has been built yet.
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_trailing_zeros() {
        let formatter = PrecisionFormatter::new(2, '.');
        assert_eq!(formatter.format(10.0), "10");
        assert_eq!(formatter.format(10.5), "10.5");
        assert_eq!(formatter.format(10.25), "10.25");
        assert_eq!(formatter.format(1234567.0), "1234567");
    }

    #[test]
    fn rounds_to_max_digits() {
        let formatter = PrecisionFormatter::new(2, '.');
        assert_eq!(formatter.format(3.14159), "3.14");
        assert_eq!(formatter.format(2.999), "3");
        assert_eq!(PrecisionFormatter::new(0, '.').format(7.8), "8");
    }

    #[test]
    fn high_precision_shows_no_binary_noise() {
        assert_eq!(PrecisionFormatter::new(10, '.').format(1234567.891), "1234567.891");
        assert_eq!(PrecisionFormatter::new(20, '.').format(0.1), "0.1");
        assert_eq!(PrecisionFormatter::new(17, '.').format(0.3), "0.3");
        assert_eq!(PrecisionFormatter::new(20, ',').format(-0.7), "-0,7");
    }

    #[test]
    fn substitutes_decimal_separator() {
        let formatter = PrecisionFormatter::new(3, ',');
        assert_eq!(formatter.format(-1.125), "-1,125");
    }

    #[test]
    fn caps_fraction_digits() {
        let formatter = PrecisionFormatter::new(usize::MAX, '.');
        assert_eq!(formatter.max_fraction_digits(), MAX_FRACTION_DIGITS);
        assert_eq!(formatter.format(0.5), "0.5");
    }

    #[test]
    fn cache_builds_once_per_precision() {
        let cache = PrecisionCache::new('.');
        assert!(cache.is_empty());

        let first = cache.get(2);
        let second = cache.get(2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        cache.get(4);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cache_is_shared_across_threads() {
        let cache = Arc::new(PrecisionCache::new('.'));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get(3))
            })
            .collect();

        let formatters: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(cache.len(), 1);
        for formatter in &formatters[1..] {
            assert!(Arc::ptr_eq(&formatters[0], formatter));
        }
    }
}
