use xxhash_rust::xxh3::Xxh3;

use crate::animation::interp::parse_hex_color;
use crate::animation::value::PropValue;
use crate::foundation::math::round_to;
use crate::subtitle::model::SubtitleSpan;

const XXH3_SEED: u64 = 0x5b1f_7a3c_90d2_e641;

/// Stable hash of everything that affects how a span looks.
///
/// Timing and animations are not hashed, so two frames with the same resolved style compare
/// equal regardless of when they occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Fingerprint `span` with numeric values rounded to `precision` decimals.
pub fn fingerprint_span(span: &SubtitleSpan, precision: u32) -> StyleFingerprint {
    let mut h = StableHasher::new();
    h.write_str(&span.text);
    h.write_u32(span.style.len() as u32);
    for (key, value) in &span.style {
        h.write_str(key);
        write_value(&mut h, value, precision);
    }
    h.finish()
}

fn write_value(h: &mut StableHasher, value: &PropValue, precision: u32) {
    match value {
        PropValue::Number(n) => {
            h.write_u8(0);
            h.write_f64(round_to(*n, precision));
        }
        PropValue::UnitNumber(u) => {
            h.write_u8(1);
            h.write_f64(round_to(u.value, precision));
            h.write_str(&u.unit);
        }
        PropValue::Color(c) => {
            h.write_u8(2);
            // `#fff`, `#FFFFFF` and `#ffffff` are the same color.
            match parse_hex_color(c) {
                Some(rgb) => h.write_bytes(&rgb),
                None => h.write_str(c),
            }
        }
        PropValue::Text(s) => {
            h.write_u8(3);
            h.write_str(s);
        }
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_bytes(&v.to_bits().to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> StyleFingerprint {
        let v = self.inner.digest128();
        StyleFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fingerprint.rs"]
mod tests;
