//! Engine configuration.
//!
//! Configuration is read once, from the `[formatting]` table of a TOML
//! document, and never changes afterwards. Reloading means building a new
//! engine.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PurseError, Result};

/// Name of the required configuration table.
pub const FORMATTING_SECTION: &str = "formatting";

/// Labels appended to abbreviated balances, one per magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixLabels {
    /// Label for values of at least 10^3.
    pub thousands: String,
    /// Label for values of at least 10^6.
    pub millions: String,
    /// Label for values of at least 10^9.
    pub billions: String,
    /// Label for values of at least 10^12.
    pub trillions: String,
    /// Label for values of at least 10^15.
    pub quadrillions: String,
}

impl SuffixLabels {
    /// Copy of these labels with every empty label replaced by its default.
    pub fn resolved(&self) -> Self {
        let defaults = Self::default();
        let pick = |label: &String, fallback: String| {
            if label.is_empty() {
                fallback
            } else {
                label.clone()
            }
        };

        Self {
            thousands: pick(&self.thousands, defaults.thousands),
            millions: pick(&self.millions, defaults.millions),
            billions: pick(&self.billions, defaults.billions),
            trillions: pick(&self.trillions, defaults.trillions),
            quadrillions: pick(&self.quadrillions, defaults.quadrillions),
        }
    }
}

impl Default for SuffixLabels {
    fn default() -> Self {
        Self {
            thousands: "K".to_string(),
            millions: "M".to_string(),
            billions: "B".to_string(),
            trillions: "T".to_string(),
            quadrillions: "Q".to_string(),
        }
    }
}

/// Settings a formatting engine is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Use `1,234.5` instead of `1.234,5`.
    pub use_us_format: bool,
    /// Magnitude suffix labels.
    pub suffix_labels: SuffixLabels,
}

/// Supplies engine configuration at startup.
pub trait ConfigSource {
    /// Produce the engine configuration.
    fn engine_config(&self) -> Result<EngineConfig>;
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    formatting: Option<FormattingSection>,
}

/// The `[formatting]` table as written in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct FormattingSection {
    us_number_format: bool,
    thousands: Option<String>,
    millions: Option<String>,
    billions: Option<String>,
    trillions: Option<String>,
    quadrillions: Option<String>,
}

impl From<FormattingSection> for EngineConfig {
    fn from(section: FormattingSection) -> Self {
        let defaults = SuffixLabels::default();
        Self {
            use_us_format: section.us_number_format,
            suffix_labels: SuffixLabels {
                thousands: section.thousands.unwrap_or(defaults.thousands),
                millions: section.millions.unwrap_or(defaults.millions),
                billions: section.billions.unwrap_or(defaults.billions),
                trillions: section.trillions.unwrap_or(defaults.trillions),
                quadrillions: section.quadrillions.unwrap_or(defaults.quadrillions),
            },
        }
    }
}

/// Configuration parsed from a TOML document.
#[derive(Debug, Clone)]
pub struct TomlConfig {
    formatting: Option<EngineConfig>,
}

impl TomlConfig {
    /// Parse a TOML document.
    pub fn parse(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(Self {
            formatting: file.formatting.map(EngineConfig::from),
        })
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::parse(&text)
    }
}

impl ConfigSource for TomlConfig {
    fn engine_config(&self) -> Result<EngineConfig> {
        self.formatting
            .clone()
            .ok_or_else(|| PurseError::missing_section(FORMATTING_SECTION))
    }
}
