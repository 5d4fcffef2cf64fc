//! Error types for the workload generator.
//!
//! Byte-sequence generation cannot fail; the only fallible path is the
//! size-targeted record batch, whose row-count estimate is corrected by
//! measurement and bounded by a maximum attempt count.

use thiserror::Error;

/// Errors that can occur during workload generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The size-targeting loop exhausted its attempts without reaching
    /// the acceptance band.
    #[error(
        "serialized batch reached {actual} of {target} target bytes after {attempts} attempts"
    )]
    SizeTargetNotReached {
        target: usize,
        actual: usize,
        attempts: u32,
    },

    /// Record batch serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
