//! Request token parsing.

use crate::error::{PurseError, Result};
use crate::format::RenderMode;

/// Prefix shared by all balance requests.
const PREFIX: &str = "balance_";

/// Suffix of a decimal-places request, e.g. `balance_3dp`.
const DECIMAL_PLACES_SUFFIX: &str = "dp";

/// A recognized balance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// `balance`
    Balance,
    /// `balance_fixed`
    Fixed,
    /// `balance_formatted`
    Formatted,
    /// `balance_commas`
    Commas,
    /// `balance_<n>dp`
    DecimalPlaces(i32),
}

impl Request {
    /// Parse a request token.
    ///
    /// Returns `Ok(None)` for tokens this handler does not serve and
    /// [`PurseError::InvalidPrecision`] for a `balance_<n>dp` token whose
    /// digits do not parse.
    pub fn parse(token: &str) -> Result<Option<Self>> {
        if let Some(digits) = decimal_places_digits(token) {
            return digits
                .parse::<i32>()
                .map(|places| Some(Request::DecimalPlaces(places)))
                .map_err(|_| PurseError::invalid_precision(digits));
        }

        Ok(match token {
            "balance" => Some(Request::Balance),
            "balance_fixed" => Some(Request::Fixed),
            "balance_formatted" => Some(Request::Formatted),
            "balance_commas" => Some(Request::Commas),
            _ => None,
        })
    }

    /// Render mode for this request.
    ///
    /// `fraction_digits` is the economy's own precision, used by `balance`.
    pub fn mode(self, fraction_digits: i32) -> RenderMode {
        match self {
            Request::Balance => RenderMode::Plain { fraction_digits },
            Request::Fixed => RenderMode::RoundedInteger,
            Request::Formatted => RenderMode::AbbreviatedCompact,
            Request::Commas => RenderMode::Grouped,
            Request::DecimalPlaces(places) => RenderMode::DecimalPlaces(places),
        }
    }
}

/// The text between `balance_` and `dp`, if the token has that shape.
///
/// A leading sign is not part of the shape, so `balance_-1dp` is unhandled.
fn decimal_places_digits(token: &str) -> Option<&str> {
    token
        .strip_prefix(PREFIX)?
        .strip_suffix(DECIMAL_PLACES_SUFFIX)
        .filter(|digits| !digits.is_empty() && !digits.starts_with(['+', '-']))
}
