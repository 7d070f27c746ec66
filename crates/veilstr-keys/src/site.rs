//! Call-site salt
//!
//! Two expansions of the same literal must not share a key stream, or the
//! identical ciphertext would let an analyst correlate call sites. Folding
//! the expansion's `file!()/line!()/column!()` coordinates into a salt
//! keeps streams independent without any global registry.

use crate::seed::fold_stamp;

/// Salt for one macro expansion site.
///
/// Const-evaluable so the salt participates in compile-time encoding and
/// can be baked into the container type as a const generic.
pub const fn site_key(file: &str, line: u32, column: u32) -> u64 {
    let mut hash = fold_stamp(file);
    // Mix the coordinates through the same avalanche the stream uses.
    hash ^= ((line as u64) << 32) | column as u64;
    hash = hash.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    hash ^ (hash >> 29)
}
