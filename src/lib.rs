//! Purse - compact, locale-aware rendering of monetary balances.
//!
//! Purse turns a player's balance into placeholder text: fixed precision,
//! rounded, grouped with separators, or abbreviated with magnitude suffixes
//! such as `1.2K` and `15M`.
//!
//! # Features
//!
//! - Abbreviation that truncates, so a shown value never exceeds the balance
//! - US (`1,234.5`) or European (`1.234,5`) numerals
//! - Configurable suffix labels, read from TOML
//! - Per-precision formatters cached for the engine's lifetime
//!
//! # Example
//!
//! ```
//! use purse::config::EngineConfig;
//! use purse::placeholder::EconomyPlaceholder;
//! use purse::source::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.deposit("alex", 1_234_000.0);
//!
//! let config = EngineConfig { use_us_format: true, ..EngineConfig::default() };
//! let handler = EconomyPlaceholder::new(config, ledger);
//!
//! assert_eq!(handler.on_request(Some("alex"), "balance_formatted").as_deref(), Some("1.2M"));
//! assert_eq!(handler.on_request(Some("alex"), "balance_commas").as_deref(), Some("1,234,000"));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod placeholder;
pub mod source;

pub use error::{PurseError, Result};
