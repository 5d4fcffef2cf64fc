//! Structured record generation for serialization benchmarks.

use crate::faker;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use workload_core::{Address, Metadata, Record, Status};

/// Number of tag words per record, fixed by the benchmark schema.
const TAG_COUNT: usize = 5;

/// 64-bit golden-ratio constant used to mix a seed with an index or
/// attempt number, so derived RNG streams are decorrelated.
pub(crate) const SEED_MIX: u64 = 0x9E3779B97F4A7C15;

/// Record generator that produces deterministic benchmark records.
///
/// The generator owns a seeded RNG and a running row index; identical
/// seeds produce identical record sequences across runs.
pub struct RecordGenerator {
    /// Seed the RNG was derived from, kept for index re-derivation.
    seed: u64,
    /// Seeded random number generator for reproducibility.
    rng: StdRng,
    /// Current row index (record ids are index + 1).
    index: u64,
}

impl RecordGenerator {
    /// Create a new record generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Set the starting index for record generation.
    ///
    /// Re-derives the RNG from (seed, index) so resuming at an index is
    /// deterministic without replaying the records before it.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self.rng = StdRng::seed_from_u64(self.rng_seed_for_index(index));
        self
    }

    /// Compute the RNG seed for a specific starting index.
    fn rng_seed_for_index(&self, index: u64) -> u64 {
        if index == 0 {
            self.seed
        } else {
            self.seed.wrapping_add(index.wrapping_mul(SEED_MIX))
        }
    }

    /// Get the current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> Record {
        let index = self.index;
        self.index += 1;

        let rng = &mut self.rng;
        let created_at = faker::date(rng);
        let updated_at = faker::date(rng);

        Record {
            id: index + 1,
            first_name: faker::first_name(rng).to_string(),
            last_name: faker::last_name(rng).to_string(),
            email: faker::email(rng),
            phone: faker::phone(rng),
            company: faker::company(rng),
            job_title: faker::job_title(rng).to_string(),
            address: Address {
                street: faker::street(rng),
                city: faker::city(rng).to_string(),
                state: faker::state(rng).to_string(),
                postal_code: faker::postal_code(rng),
                country: faker::country(rng).to_string(),
                latitude: faker::latitude(rng),
                longitude: faker::longitude(rng),
            },
            created_at,
            updated_at,
            description: faker::paragraph(rng),
            password: faker::password(rng, 16),
            ip_address: faker::ipv4(rng),
            user_agent: faker::user_agent(rng).to_string(),
            tags: faker::words(rng, TAG_COUNT),
            status: *Status::ALL.choose(rng).unwrap_or(&Status::Active),
            metadata: Metadata {
                views: rng.gen_range(100..=10_000),
                likes: rng.gen_range(10..=1_000),
                favorites: rng.gen_range(0..=500),
                last_login: faker::date(rng),
                is_premium: rng.gen_bool(0.5),
            },
        }
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

/// Generate `count` records with the given seed.
pub fn generate_records(count: u64, seed: u64) -> Vec<Record> {
    RecordGenerator::new(seed).records(count).collect()
}
