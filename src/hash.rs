//! Polynomial rolling string hash, `h = h * 31 + code(c)` from `h = 0`.
//!
//! The digest is 32-bit signed and wraps on overflow. A character's code is
//! its Unicode scalar value, so ASCII text hashes the same as a C++
//! `std::string` walk over signed `char`.

use crate::hazard::Hazard;

/// Overflow is wrapped here rather than trapped.
pub const HAZARD: Hazard = Hazard::IntegerOverflow;

const MULTIPLIER: i32 = 31;

/// Incremental form of [`string_hash`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollingHash {
    h: i32,
}

impl RollingHash {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, c: char) {
        self.push_code(code(c));
    }

    pub fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push(c);
        }
    }

    pub fn value(&self) -> i32 {
        self.h
    }

    #[inline]
    fn push_code(&mut self, code: i32) {
        self.h = self.h.wrapping_mul(MULTIPLIER).wrapping_add(code);
    }
}

/// Numeric code fed into the hash for a character.
#[inline]
pub fn code(c: char) -> i32 {
    // Scalar values top out at 0x10FFFF, well inside i32.
    c as u32 as i32
}

/// Digest of `s`. Overflow wraps, so [`HAZARD`] is absorbed rather than
/// reported and this never fails.
pub fn string_hash(s: &str) -> i32 {
    let mut hasher = RollingHash::new();
    hasher.push_str(s);
    hasher.value()
}

/// Byte-oriented hash where each byte is sign-extended like a signed `char`.
///
/// Matches [`string_hash`] for ASCII; differs once bytes reach 0x80.
pub fn byte_hash(bytes: &[u8]) -> i32 {
    let mut hasher = RollingHash::new();
    for &b in bytes {
        hasher.push_code(b as i8 as i32);
    }
    hasher.value()
}
