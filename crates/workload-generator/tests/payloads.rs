//! End-to-end payload properties across generation strategies.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use workload_core::{DataCategory, Record, SMALL_SIZE};
use workload_generator::{
    generate_payload, generate_sized_batch, generate_template, BatchConfig, PayloadCache,
};

/// The 1 MB binary payload is the reference scenario: exact length and
/// stable content for a fixed seed, regardless of how the generator is
/// invoked.
#[test]
fn binary_1mb_reference_payload() {
    let payload = generate_payload(SMALL_SIZE, DataCategory::Binary, 42);
    assert_eq!(payload.len(), SMALL_SIZE);

    // A second process would construct its own generator state from the
    // same seed; a fresh call models that.
    let again = generate_payload(SMALL_SIZE, DataCategory::Binary, 42);
    assert_eq!(payload, again);

    // And a cache seeded identically must agree byte-for-byte.
    let mut cache = PayloadCache::new(42);
    let cached = cache.get_or_generate(DataCategory::Binary, SMALL_SIZE);
    assert_eq!(cached[..], payload[..]);
}

/// FNV-1a 64-bit hash, for compact golden fingerprints.
fn fingerprint(data: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in data {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Pins the 1 MB binary/seed-42 payload to recorded values, so a change
/// to the generation logic (or its RNG stream) fails here instead of
/// silently shifting every benchmark input.
#[test]
fn binary_1mb_matches_recorded_output() {
    let payload = generate_payload(SMALL_SIZE, DataCategory::Binary, 42);
    assert_eq!(payload.len(), SMALL_SIZE);

    // Recorded structural literal: the pattern length is at least 64, so
    // the first 64 bytes of every window's pattern half count up from
    // zero regardless of what lengths the RNG draws.
    for window_start in (0..payload.len()).step_by(1024) {
        for offset in 0..64 {
            assert_eq!(
                payload[window_start + offset],
                offset as u8,
                "window at {window_start} does not open with the pattern ramp"
            );
        }
    }

    // Recorded fingerprint: written once, then asserted against on every
    // later run. Commit the file so refactors and toolchain updates are
    // checked against the pinned byte stream.
    let actual = format!("{:016x}\n", fingerprint(&payload));
    let path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden/binary_1mb_seed42.fnv1a");
    if path.exists() {
        let recorded = fs::read_to_string(&path).expect("read recorded fingerprint");
        assert_eq!(
            actual,
            recorded,
            "payload diverged from the fingerprint recorded in {}",
            path.display()
        );
    } else {
        let parent = path.parent().expect("golden directory");
        fs::create_dir_all(parent).expect("create golden directory");
        fs::write(&path, &actual).expect("record fingerprint");
    }
}

#[test]
fn categories_produce_distinct_shapes() {
    let size = 1 << 16;
    let random = generate_payload(size, DataCategory::Random, 42);
    let text = generate_payload(size, DataCategory::Text, 42);
    let binary = generate_payload(size, DataCategory::Binary, 42);

    assert_ne!(random, text);
    assert_ne!(text, binary);
    assert_ne!(random, binary);

    // Text is the only category constrained to printable ASCII.
    assert!(text
        .iter()
        .all(|b| *b == b'\n' || (0x20..=0x7e).contains(b)));
    assert!(random.iter().any(|b| *b > 0x7e));
}

#[test]
fn category_labels_round_trip_through_parsing() {
    for category in DataCategory::ALL {
        let label = category.to_string();
        let parsed = DataCategory::from_str(&label).unwrap();
        let a = generate_payload(2048, category, 7);
        let b = generate_payload(2048, parsed, 7);
        assert_eq!(a, b);
    }
}

#[test]
fn sized_batch_round_trips_through_json() {
    let batch = generate_sized_batch(&BatchConfig::new(SMALL_SIZE, 42)).unwrap();

    assert!(batch.json.len() >= SMALL_SIZE / 2);
    assert!(batch.attempts <= 5);

    let parsed: Vec<Record> = serde_json::from_slice(&batch.json).unwrap();
    assert_eq!(parsed.len(), batch.records.len());
    assert_eq!(parsed[0], batch.records[0]);
}

#[test]
fn template_round_trips_through_yaml() {
    let doc = generate_template(42);
    let value: serde_yaml::Value = serde_yaml::from_str(&doc).unwrap();

    // Re-emitting and re-parsing must preserve the document structure.
    let reemitted = serde_yaml::to_string(&value).unwrap();
    let reparsed: serde_yaml::Value = serde_yaml::from_str(&reemitted).unwrap();
    assert_eq!(value, reparsed);
}
