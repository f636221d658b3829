//! Balance formatting.
//!
//! This module turns balances into text: fixed precision, rounded,
//! grouped and abbreviated with magnitude suffixes.

mod convention;
mod engine;
mod precision;
mod suffix;

pub use convention::NumeralConvention;
pub use engine::{FormattingEngine, RenderMode};
pub use precision::{PrecisionCache, PrecisionFormatter};
pub use suffix::{SuffixEntry, SuffixTable};
