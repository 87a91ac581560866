//! Rolling hash used to bucket location names into palette slots.
//!
//! The hash is the classic `h = h * 31 + c` polynomial, computed over UTF-16
//! code units with two's-complement 32-bit wraparound. Frontends that compute
//! the same hash with `charCodeAt` produce identical values, so a name maps to
//! the same palette slot no matter which side does the hashing.

/// Hashes a location name to a signed 32-bit value.
///
/// Astral characters contribute two surrogate code units. The empty string
/// hashes to 0.
pub fn name_hash(name: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash
}

/// Reduces a hash to a palette index in `[0, len)`.
///
/// `unsigned_abs` maps `i32::MIN` to 2147483648 instead of wrapping back to a
/// negative value, matching `Math.abs` on an IEEE double. Callers guarantee
/// `len` is non-zero; `Palette` enforces this at construction.
pub fn bucket(hash: i32, len: usize) -> usize {
    hash.unsigned_abs() as usize % len
}
