//! Build-identity seed
//!
//! `build.rs` stamps the crate with `VEILSTR_BUILD_STAMP` (nanoseconds at
//! build-script time, or a caller-pinned value). Folding the stamp string
//! through FNV-1a gives a 64-bit seed that is constant within one
//! compilation and different across builds.

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Fold an arbitrary stamp string into a 64-bit seed.
///
/// Total over any input; the empty string maps to the offset basis.
pub const fn fold_stamp(stamp: &str) -> u64 {
    let bytes = stamp.as_bytes();
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// The seed for this compilation.
///
/// Never stored at runtime as anything but an immediate operand inside the
/// key stream computations that consume it.
pub const BUILD_SEED: u64 = fold_stamp(env!("VEILSTR_BUILD_STAMP"));
