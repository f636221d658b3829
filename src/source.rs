//! Balance sources.

use std::collections::HashMap;

/// Fractional digits reported by a [`Ledger`] unless configured otherwise.
pub const DEFAULT_FRACTIONAL_DIGITS: i32 = 2;

/// Provides player balances, typically backed by an economy plugin.
pub trait BalanceSource {
    /// Current balance of a player.
    fn balance(&self, player: &str) -> f64;

    /// Number of fractional digits the economy uses.
    fn fractional_digits(&self) -> i32;
}

impl<S: BalanceSource + ?Sized> BalanceSource for &S {
    fn balance(&self, player: &str) -> f64 {
        (**self).balance(player)
    }

    fn fractional_digits(&self) -> i32 {
        (**self).fractional_digits()
    }
}

/// In-memory balances keyed by player name.
#[derive(Debug, Clone)]
pub struct Ledger {
    balances: HashMap<String, f64>,
    fractional_digits: i32,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            fractional_digits: DEFAULT_FRACTIONAL_DIGITS,
        }
    }

    /// Set the fractional digits reported to formatters.
    pub fn with_fractional_digits(mut self, digits: i32) -> Self {
        self.fractional_digits = digits;
        self
    }

    /// Set a player's balance.
    pub fn deposit(&mut self, player: impl Into<String>, balance: f64) {
        self.balances.insert(player.into(), balance);
    }

    /// Number of players with a recorded balance.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Check if no balance has been recorded.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceSource for Ledger {
    fn balance(&self, player: &str) -> f64 {
        self.balances.get(player).copied().unwrap_or(0.0)
    }

    fn fractional_digits(&self) -> i32 {
        self.fractional_digits
    }
}
