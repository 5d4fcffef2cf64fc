//! Uniformly random byte generation.

use rand::Rng;

/// Generate `size` uniformly distributed bytes.
pub fn generate_random_bytes<R: Rng>(rng: &mut R, size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exact_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_random_bytes(&mut rng, 12_345).len(), 12_345);
    }

    #[test]
    fn test_near_uniform_histogram() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = generate_random_bytes(&mut rng, 1 << 20);

        let mut histogram = [0u32; 256];
        for byte in &data {
            histogram[*byte as usize] += 1;
        }

        // Expected count per value is 4096; allow a generous band.
        for (value, count) in histogram.iter().enumerate() {
            assert!(
                (3_200..5_000).contains(count),
                "byte value {value} occurred {count} times"
            );
        }
    }

    #[test]
    fn test_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_random_bytes(&mut rng, 0).is_empty());
    }
}
