//! Placeholder requests.
//!
//! This module maps request tokens such as `balance_formatted` onto the
//! formatting engine for a given player.

mod request;

pub use request::Request;

use crate::config::{ConfigSource, EngineConfig};
use crate::error::Result;
use crate::format::FormattingEngine;
use crate::source::BalanceSource;

/// Answers balance placeholder requests.
#[derive(Debug)]
pub struct EconomyPlaceholder<S> {
    engine: FormattingEngine,
    source: S,
}

impl<S: BalanceSource> EconomyPlaceholder<S> {
    /// Create a handler from an engine configuration.
    pub fn new(config: EngineConfig, source: S) -> Self {
        Self::with_engine(FormattingEngine::new(config), source)
    }

    /// Create a handler around an existing engine.
    pub fn with_engine(engine: FormattingEngine, source: S) -> Self {
        Self { engine, source }
    }

    /// Create a handler from a configuration source.
    pub fn from_config(config: &dyn ConfigSource, source: S) -> Result<Self> {
        Ok(Self::new(config.engine_config()?, source))
    }

    /// Formatting engine in use.
    pub fn engine(&self) -> &FormattingEngine {
        &self.engine
    }

    /// Answer a request.
    ///
    /// Without a player the answer is an empty string. Tokens this handler
    /// does not serve yield `None`, and an unparseable precision yields a
    /// message naming the offending digits.
    pub fn on_request(&self, player: Option<&str>, token: &str) -> Option<String> {
        let Some(player) = player else {
            return Some(String::new());
        };

        let request = match Request::parse(token) {
            Ok(Some(request)) => request,
            Ok(None) => {
                tracing::debug!(token, "unhandled request");
                return None;
            }
            Err(err) => {
                tracing::warn!(token, error = %err, "invalid request");
                return Some(err.to_string());
            }
        };

        let balance = self.source.balance(player);
        let mode = request.mode(self.source.fractional_digits());
        Some(self.engine.render(balance, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TomlConfig;
    use crate::source::Ledger;

    fn handler(use_us_format: bool, balance: f64) -> EconomyPlaceholder<Ledger> {
        let mut ledger = Ledger::new();
        ledger.deposit("alex", balance);
        EconomyPlaceholder::new(
            EngineConfig {
                use_us_format,
                ..EngineConfig::default()
            },
            ledger,
        )
    }

    #[test]
    fn missing_player_is_empty() {
        let handler = handler(true, 1500.0);
        assert_eq!(handler.on_request(None, "balance").as_deref(), Some(""));
        assert_eq!(handler.on_request(None, "balance_abcdp").as_deref(), Some(""));
        assert_eq!(handler.on_request(None, "no_such_token").as_deref(), Some(""));
    }

    #[test]
    fn all_tokens_us() {
        let handler = handler(true, 1234567.891);
        let ask = |token| handler.on_request(Some("alex"), token);
        assert_eq!(ask("balance").as_deref(), Some("1234567.89"));
        assert_eq!(ask("balance_fixed").as_deref(), Some("1234568"));
        assert_eq!(ask("balance_formatted").as_deref(), Some("1.2M"));
        assert_eq!(ask("balance_commas").as_deref(), Some("1,234,567.891"));
        assert_eq!(ask("balance_1dp").as_deref(), Some("1234567.9"));
        assert_eq!(ask("balance_0dp").as_deref(), Some("1234568"));
    }

    #[test]
    fn all_tokens_european() {
        let handler = handler(false, 1500.25);
        let ask = |token| handler.on_request(Some("alex"), token);
        assert_eq!(ask("balance").as_deref(), Some("1500,25"));
        assert_eq!(ask("balance_formatted").as_deref(), Some("1,5K"));
        assert_eq!(ask("balance_commas").as_deref(), Some("1.500,25"));
    }

    #[test]
    fn plain_balance_uses_economy_digits() {
        let mut ledger = Ledger::new().with_fractional_digits(4);
        ledger.deposit("alex", 3.14159);
        let handler = EconomyPlaceholder::new(
            EngineConfig {
                use_us_format: true,
                ..EngineConfig::default()
            },
            ledger,
        );
        assert_eq!(handler.on_request(Some("alex"), "balance").as_deref(), Some("3.1416"));
    }

    #[test]
    fn invalid_precision_is_a_message() {
        let handler = handler(true, 10.0);
        assert_eq!(
            handler.on_request(Some("alex"), "balance_abcdp").as_deref(),
            Some("'abc' is not a valid number")
        );
    }

    #[test]
    fn unknown_token_is_unhandled() {
        let handler = handler(true, 10.0);
        assert_eq!(handler.on_request(Some("alex"), "balance_total"), None);
        assert_eq!(handler.on_request(Some("alex"), "rank"), None);
    }

    #[test]
    fn signed_precision_token_is_unhandled() {
        let handler = handler(true, 10.0);
        assert_eq!(handler.on_request(Some("alex"), "balance_-1dp"), None);
        assert_eq!(handler.on_request(Some("alex"), "balance_+3dp"), None);
    }

    #[test]
    fn unknown_player_renders_zero() {
        let handler = handler(true, 10.0);
        assert_eq!(handler.on_request(Some("sam"), "balance_formatted").as_deref(), Some("0"));
    }

    #[test]
    fn from_config_requires_section() {
        let config = TomlConfig::parse("title = \"no formatting here\"\n").unwrap();
        assert!(EconomyPlaceholder::from_config(&config, Ledger::new()).is_err());

        let config = TomlConfig::parse("[formatting]\nus-number-format = true\n").unwrap();
        let handler = EconomyPlaceholder::from_config(&config, Ledger::new()).unwrap();
        assert_eq!(handler.engine().convention().decimal_separator(), '.');
    }
}
