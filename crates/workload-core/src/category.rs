//! Payload categories and benchmark size tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1 MB payload tier.
pub const SMALL_SIZE: usize = 1 << 20;

/// 10 MB payload tier.
pub const MEDIUM_SIZE: usize = 10 << 20;

/// 100 MB payload tier.
pub const LARGE_SIZE: usize = 100 << 20;

/// The statistical shape a generated byte payload should exhibit.
///
/// A closed enum rather than a string tag so that dispatch over the
/// generation strategies is exhaustiveness-checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataCategory {
    /// Uniformly distributed byte values.
    Random,
    /// Natural-language-like ASCII text.
    Text,
    /// Alternating repeating-pattern and random sections.
    Binary,
}

impl DataCategory {
    /// All categories, for exhaustive iteration in tests and benches.
    pub const ALL: [DataCategory; 3] = [
        DataCategory::Random,
        DataCategory::Text,
        DataCategory::Binary,
    ];

    /// The lowercase label used in benchmark names and cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataCategory::Random => "random",
            DataCategory::Text => "text",
            DataCategory::Binary => "binary",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized category label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown data category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for DataCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(DataCategory::Random),
            "text" => Ok(DataCategory::Text),
            "binary" => Ok(DataCategory::Binary),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Estimate the record count for a target serialized size.
///
/// Fixed lookup over the benchmark size tiers; targets outside the known
/// tiers fall back to a small batch. The size-targeting loop in the
/// generator corrects underestimates by measuring the serialized output.
pub fn row_count_for_target(target_bytes: usize) -> u64 {
    match target_bytes {
        SMALL_SIZE => 250,
        MEDIUM_SIZE => 2_500,
        LARGE_SIZE => 25_000,
        _ => 100,
    }
}
