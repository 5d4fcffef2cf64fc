//! Byte-sequence generation strategies.
//!
//! Each strategy takes the caller's RNG and a byte-size target and returns
//! exactly that many bytes. [`generate_payload`] is the seeded entry point
//! used by benchmark setup code.

pub mod binary;
pub mod random;
pub mod text;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use workload_core::DataCategory;

/// Generate a byte payload of exactly `size` bytes.
///
/// A pure function of its arguments: a private `StdRng` is derived from
/// `seed` per call, so identical inputs yield byte-identical output across
/// calls and processes.
pub fn generate_payload(size: usize, category: DataCategory, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_payload_with_rng(&mut rng, size, category)
}

/// Generate a byte payload of exactly `size` bytes using the given RNG.
pub fn generate_payload_with_rng<R: Rng>(
    rng: &mut R,
    size: usize,
    category: DataCategory,
) -> Vec<u8> {
    match category {
        DataCategory::Random => random::generate_random_bytes(rng, size),
        DataCategory::Text => text::generate_text_bytes(rng, size),
        DataCategory::Binary => binary::generate_binary_bytes(rng, size),
    }
}
