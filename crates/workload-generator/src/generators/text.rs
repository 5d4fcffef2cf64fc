//! Natural-language-like text generation.

use crate::faker;
use rand::Rng;

/// Generate `size` bytes of text-shaped data.
///
/// Chunks are drawn uniformly from four sub-generators (paragraph,
/// sentence, pseudo-JSON object, single word), separated by a space or
/// newline chosen uniformly. The corpus is pure ASCII, so truncating to
/// the exact target cannot split a UTF-8 sequence.
pub fn generate_text_bytes<R: Rng>(rng: &mut R, size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size + 512);

    while data.len() < size {
        let chunk = match rng.gen_range(0..4) {
            0 => faker::paragraph(rng),
            1 => {
                let word_count = rng.gen_range(3..=10);
                faker::sentence(rng, word_count)
            }
            2 => pseudo_json(rng),
            _ => faker::word(rng).to_string(),
        };

        if !data.is_empty() {
            data.push(if rng.gen_bool(0.5) { b' ' } else { b'\n' });
        }
        data.extend_from_slice(chunk.as_bytes());
    }

    data.truncate(size);
    data
}

/// A small JSON object of fake values, rendered compactly.
fn pseudo_json<R: Rng>(rng: &mut R) -> String {
    serde_json::json!({
        "name": faker::full_name(rng),
        "email": faker::email(rng),
        "city": faker::city(rng),
        "active": rng.gen_bool(0.5),
        "score": rng.gen_range(0..100),
    })
    .to_string()
}
