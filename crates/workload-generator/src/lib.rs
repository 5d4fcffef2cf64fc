//! Deterministic workload generator for benchmark suites.
//!
//! This crate produces reproducible, size-targeted test payloads: raw byte
//! sequences shaped by a [`DataCategory`], structured record batches for
//! serialization benchmarks, and pipeline-configuration-like template
//! documents. All generation is driven by an explicit seed threaded through
//! a private `StdRng` per call, so identical inputs yield byte-identical
//! output across runs and processes and concurrent callers never share
//! hidden state.
//!
//! # Architecture
//!
//! ```text
//! (size, category, seed)        (count | target_bytes, seed)
//!        │                                │
//!        ▼                                ▼
//! ┌──────────────────┐          ┌──────────────────┐
//! │ generate_payload │          │ RecordGenerator  │
//! │  - random        │          │  - rng (StdRng)  │
//! │  - text          │          │  - index         │
//! │  - binary        │          └────────┬─────────┘
//! └────────┬─────────┘                   │
//!          ▼                             ▼
//!       Vec<u8>                  Vec<Record> / SizedBatch
//! ```
//!
//! # Example
//!
//! ```rust
//! use workload_core::DataCategory;
//! use workload_generator::generate_payload;
//!
//! let payload = generate_payload(4096, DataCategory::Text, 42);
//! assert_eq!(payload.len(), 4096);
//! assert_eq!(payload, generate_payload(4096, DataCategory::Text, 42));
//! ```

pub mod batch;
pub mod cache;
pub mod error;
pub mod faker;
pub mod generators;
pub mod records;
pub mod template;

// Re-exports for convenience
pub use batch::{generate_sized_batch, BatchConfig, SizedBatch};
pub use cache::PayloadCache;
pub use error::GeneratorError;
pub use generators::{generate_payload, generate_payload_with_rng};
pub use records::{generate_records, RecordGenerator, RecordIterator};
pub use template::{generate_template, generate_template_with_rng};
