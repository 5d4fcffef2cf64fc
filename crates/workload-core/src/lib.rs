//! Core types for the deterministic workload generator.
//!
//! This crate provides the foundational types shared by the generator and
//! its consumers:
//!
//! - [`DataCategory`] - Closed enum over the byte-payload shapes
//! - Size tier constants ([`SMALL_SIZE`], [`MEDIUM_SIZE`], [`LARGE_SIZE`])
//!   and the [`row_count_for_target`] heuristic
//! - [`Record`] and its nested [`Address`] / [`Metadata`] sub-objects, the
//!   schema round-tripped by serialization benchmarks
//!
//! # Architecture
//!
//! ```text
//! workload-core (this crate)
//!    │
//!    └─── workload-generator  (depends on workload-core for types)
//! ```

pub mod category;
pub mod record;

// Re-exports for convenience
pub use category::{
    row_count_for_target, DataCategory, UnknownCategory, LARGE_SIZE, MEDIUM_SIZE, SMALL_SIZE,
};
pub use record::{Address, Metadata, Record, Status};
