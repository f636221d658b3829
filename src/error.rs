//! Error types for Purse.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Purse operations.
pub type Result<T> = std::result::Result<T, PurseError>;

/// Errors that can occur in Purse.
#[derive(Debug, Error)]
pub enum PurseError {
    /// A decimal-places request whose digits do not parse as an integer.
    ///
    /// The display text is shown to users as-is.
    #[error("'{token}' is not a valid number")]
    InvalidPrecision {
        /// The digits as written in the request.
        token: String,
    },

    /// A required configuration table is absent.
    #[error("Missing configuration section: [{section}]")]
    MissingSection {
        /// Table name, without brackets.
        section: String,
    },

    /// Failed to parse a TOML configuration document.
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PurseError {
    /// Create an InvalidPrecision error.
    pub fn invalid_precision(token: impl Into<String>) -> Self {
        Self::InvalidPrecision {
            token: token.into(),
        }
    }

    /// Create a MissingSection error.
    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection {
            section: section.into(),
        }
    }
}
