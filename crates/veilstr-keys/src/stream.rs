//! Position-indexed key stream
//!
//! A PCG-XSH-RR output step over an LCG state advanced directly to the
//! requested position. `key(position)` is a pure function of
//! `(seed, site, position)`: there is no stored generator state and no
//! precomputed table, so both the compile-time encode and every runtime
//! decode derive each word independently.

/// LCG multiplier (PCG reference constant).
const PCG_MUL: u64 = 6364136223846793005;

/// One 32-bit PCG-XSH-RR draw at an absolute stream position.
///
/// Wrapping arithmetic throughout; total over the full input range. The
/// increment must be odd, so bit 0 of `seed` does not reach the stream.
pub const fn pcg32(seed: u64, position: u64) -> u32 {
    let state = position.wrapping_mul(PCG_MUL).wrapping_add(seed | 1);
    let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
    let rot = (state >> 59) as u32;
    xorshifted.rotate_right(rot)
}

/// A 64-bit key word for the XOR block at `position`.
///
/// Two independent 32-bit draws are widened rather than one draw reused,
/// so adjacent halves of a block never correlate. The call-site salt is
/// folded into the seed, giving each expansion its own stream.
pub const fn word(seed: u64, site: u64, position: u64) -> u64 {
    let s = seed ^ site;
    let lo = pcg32(s, position << 1) as u64;
    let hi = pcg32(s, (position << 1) | 1) as u64;
    (hi << 32) | lo
}

/// Narrower truncations for sub-word tails.
pub const fn word32(seed: u64, site: u64, position: u64) -> u32 {
    word(seed, site, position) as u32
}

pub const fn word16(seed: u64, site: u64, position: u64) -> u16 {
    word(seed, site, position) as u16
}

pub const fn word8(seed: u64, site: u64, position: u64) -> u8 {
    word(seed, site, position) as u8
}
