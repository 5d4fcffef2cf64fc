//! Mixed pattern/random binary generation.
//!
//! Output alternates between two phases keyed by position modulo 1024:
//! positions `[0, 512)` of each window hold bytes from a short repeating
//! pattern, positions `[512, 1024)` hold independent uniform random bytes.
//! This gives compression codecs a payload with both highly compressible
//! and incompressible regions at a fixed interleave.

use rand::Rng;

const WINDOW: usize = 1024;
const PATTERN_HALF: usize = 512;

/// Generate `size` bytes of pattern/random interleaved binary data.
///
/// Each pattern phase draws a fresh pattern length (64-256) and a section
/// budget (512-4096); a phase ends when the budget is exhausted, the
/// position crosses the half-window boundary, or the size target is
/// reached, whichever comes first.
pub fn generate_binary_bytes<R: Rng>(rng: &mut R, size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);

    while data.len() < size {
        if data.len() % WINDOW < PATTERN_HALF {
            let pattern_len = rng.gen_range(64..=256);
            let section = rng.gen_range(512..=4096);
            let mut offset = 0usize;
            while offset < section && data.len() < size && data.len() % WINDOW < PATTERN_HALF {
                data.push((offset % pattern_len) as u8);
                offset += 1;
            }
        } else {
            let section = rng.gen_range(512..=4096);
            let mut offset = 0usize;
            while offset < section && data.len() < size && data.len() % WINDOW >= PATTERN_HALF {
                data.push(rng.gen());
                offset += 1;
            }
        }
    }

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
        for size in [1, 511, 512, 1023, 1024, 4096, 1 << 16] {
            assert_eq!(generate_binary_bytes(&mut rng, size).len(), size);
        }
    }

    #[test]
    fn test_pattern_half_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = generate_binary_bytes(&mut rng, 1 << 16);

        // Every full window starts its pattern at offset zero, so bytes in
        // [0, 512) are a ramp that resets at the pattern period (<= 256).
        for window in data.chunks_exact(WINDOW) {
            let pattern = &window[..PATTERN_HALF];
            assert_eq!(pattern[0], 0);
            for pair in pattern.windows(2) {
                assert!(
                    pair[1] == pair[0].wrapping_add(1) || pair[1] == 0,
                    "pattern half not a resetting ramp: {} -> {}",
                    pair[0],
                    pair[1]
                );
            }
            // Pattern length is at least 64, so the ramp reaches 63.
            assert!(pattern.iter().any(|b| *b >= 63));
        }
    }

    #[test]
    fn test_random_half_is_not_patterned() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = generate_binary_bytes(&mut rng, 1 << 16);

        for window in data.chunks_exact(WINDOW) {
            let random_half = &window[PATTERN_HALF..];
            let ramp_steps = random_half
                .windows(2)
                .filter(|pair| pair[1] == pair[0].wrapping_add(1))
                .count();
            // A uniform byte follows its predecessor's ramp with
            // probability 1/256; anything near the pattern half's rate
            // would mean the phases leaked into each other.
            assert!(
                ramp_steps < 64,
                "random half looks patterned: {ramp_steps} ramp steps"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_binary_bytes(&mut rng1, 8192),
            generate_binary_bytes(&mut rng2, 8192)
        );
    }
}
