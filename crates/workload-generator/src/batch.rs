//! Size-targeted record batches.
//!
//! Serialized record size varies with the drawn values, so a fixed row
//! count only approximates a byte target. The batch generator starts from
//! the tier heuristic, measures the serialized output, and rescales the
//! row count until the result lands in the acceptance band, bounded by a
//! maximum attempt count.

use crate::error::GeneratorError;
use crate::records::{generate_records, SEED_MIX};
use serde::{Deserialize, Serialize};
use tracing::debug;
use workload_core::{row_count_for_target, Record};

/// Default maximum number of sizing attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default acceptance threshold: serialized size must reach this fraction
/// of the target.
pub const DEFAULT_MIN_FILL: f64 = 0.5;

/// Configuration for a size-targeted record batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Target serialized size in bytes.
    pub target_bytes: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
    /// Maximum number of sizing attempts before giving up.
    pub max_attempts: u32,
    /// Fraction of the target the serialized size must reach.
    pub min_fill: f64,
}

impl BatchConfig {
    /// Create a batch configuration with default sizing bounds.
    pub fn new(target_bytes: usize, seed: u64) -> Self {
        Self {
            target_bytes,
            seed,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_fill: DEFAULT_MIN_FILL,
        }
    }

    /// Set the maximum number of sizing attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the acceptance threshold as a fraction of the target.
    pub fn with_min_fill(mut self, min_fill: f64) -> Self {
        self.min_fill = min_fill;
        self
    }
}

/// A record batch that reached its serialized size target.
#[derive(Debug, Clone)]
pub struct SizedBatch {
    /// The generated records.
    pub records: Vec<Record>,
    /// The records serialized as a JSON array.
    pub json: Vec<u8>,
    /// Number of rows in the accepted batch.
    pub row_count: u64,
    /// Number of attempts taken to reach the target.
    pub attempts: u32,
}

/// Generate a record batch whose serialized JSON size falls within the
/// configured band of the target.
///
/// Attempt 1 uses the tier heuristic row count; on underfill the row
/// count is rescaled proportionally and the RNG is re-derived from
/// (seed, attempt), so retries explore different data rather than
/// repeating identical parameters. Returns
/// [`GeneratorError::SizeTargetNotReached`] once the attempt budget is
/// exhausted.
pub fn generate_sized_batch(config: &BatchConfig) -> Result<SizedBatch, GeneratorError> {
    let mut rows = row_count_for_target(config.target_bytes);
    let mut last_actual = 0usize;

    for attempt in 1..=config.max_attempts {
        let seed = config
            .seed
            .wrapping_add(u64::from(attempt - 1).wrapping_mul(SEED_MIX));
        let records = generate_records(rows, seed);
        let json = serde_json::to_vec(&records)?;
        let actual = json.len();

        debug!(
            attempt,
            rows,
            actual_bytes = actual,
            target_bytes = config.target_bytes,
            "generated record batch"
        );

        if actual as f64 >= config.min_fill * config.target_bytes as f64 {
            return Ok(SizedBatch {
                records,
                json,
                row_count: rows,
                attempts: attempt,
            });
        }

        last_actual = actual;
        // Rescale proportionally; actual is never zero because even an
        // empty batch serializes to "[]".
        let scaled = (rows as u128 * config.target_bytes as u128 / actual.max(1) as u128) as u64;
        rows = scaled.max(rows + 1);
    }

    Err(GeneratorError::SizeTargetNotReached {
        target: config.target_bytes,
        actual: last_actual,
        attempts: config.max_attempts,
    })
}
