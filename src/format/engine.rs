//! The balance formatting engine.

use super::convention::NumeralConvention;
use super::precision::PrecisionCache;
use super::suffix::SuffixTable;
use crate::config::EngineConfig;

/// How a balance is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Fixed precision using the economy's fractional digits, at least two.
    Plain {
        /// Fractional digits reported by the balance source.
        fraction_digits: i32,
    },
    /// Rounded half up to a whole number, no separators.
    RoundedInteger,
    /// Grouping and decimal separators of the configured convention.
    Grouped,
    /// Abbreviated with a magnitude suffix, e.g. `1.2K`.
    AbbreviatedCompact,
    /// At most `n` fractional digits; negative counts behave like zero.
    DecimalPlaces(i32),
}

/// Renders balances according to an immutable [`EngineConfig`].
#[derive(Debug)]
pub struct FormattingEngine {
    convention: NumeralConvention,
    suffixes: SuffixTable,
    precision_cache: PrecisionCache,
}

impl FormattingEngine {
    /// Create an engine from configuration.
    pub fn new(config: EngineConfig) -> Self {
        let convention = NumeralConvention::from_us_flag(config.use_us_format);
        let suffixes = SuffixTable::new(&config.suffix_labels);

        tracing::debug!(
            convention = convention.name(),
            decimal = %convention.decimal_separator(),
            grouping = %convention.grouping_separator(),
            "formatting engine ready"
        );

        Self {
            convention,
            precision_cache: PrecisionCache::new(convention.decimal_separator()),
            suffixes,
        }
    }

    /// Numeral convention in use.
    pub fn convention(&self) -> NumeralConvention {
        self.convention
    }

    /// Number of precision formatters built so far.
    pub fn cached_precisions(&self) -> usize {
        self.precision_cache.len()
    }

    /// Render a balance.
    pub fn render(&self, balance: f64, mode: RenderMode) -> String {
        match mode {
            RenderMode::Plain { fraction_digits } => {
                self.format_decimal_places(balance, fraction_digits.max(2))
            }
            RenderMode::RoundedInteger => round_half_up(balance).to_string(),
            RenderMode::Grouped => self.convention.format_grouped(balance),
            // Saturating cast truncates toward zero; NaN becomes 0.
            RenderMode::AbbreviatedCompact => self.format_compact(balance as i64),
            RenderMode::DecimalPlaces(places) => self.format_decimal_places(balance, places),
        }
    }

    /// Format with at most `places` fractional digits, clamping negatives to zero.
    pub fn format_decimal_places(&self, balance: f64, places: i32) -> String {
        let places = usize::try_from(places.max(0)).unwrap_or_default();
        self.precision_cache.get(places).format(balance)
    }

    /// Abbreviate a whole balance with a magnitude suffix.
    ///
    /// The shown digit is truncated, so the output never exceeds the balance.
    pub fn format_compact(&self, balance: i64) -> String {
        let balance = balance.max(i64::MIN + 1);
        if balance < 0 {
            return format!("-{}", self.format_compact(-balance));
        }

        let value = balance.unsigned_abs();
        let Some(entry) = self.suffixes.lookup(value) else {
            return balance.to_string();
        };

        let truncated = value / (entry.threshold() / 10);
        let whole = truncated / 10;
        let tenth = truncated % 10;

        if truncated < 100 && tenth != 0 {
            format!(
                "{}{}{}{}",
                whole,
                self.convention.decimal_separator(),
                tenth,
                entry.label()
            )
        } else {
            format!("{}{}", whole, entry.label())
        }
    }
}

impl Default for FormattingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Round half up to a whole number, saturating at the `i64` range; NaN gives 0.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
