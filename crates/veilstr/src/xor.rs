//! In-place key stream XOR
//!
//! The single state transition of a container: regenerate the key word for
//! every position and fold it into the storage. Buffers are always a
//! multiple of [`BLOCK_WORDS`] so the SSE2 path needs no tail handling;
//! the scalar volatile loop is the reference implementation the vector
//! path is tested against.
//!
//! Both paths launder the storage pointer through `black_box` and the
//! scalar path uses volatile accesses: the toggle must look externally
//! observable to the optimizer, or a decrypted value could be cached past
//! its window or the re-encrypt elided entirely.

use veilstr_keys::stream;

use crate::encode::BLOCK_WORDS;

/// Toggle `words` between encoded and decoded, 128 bits at a time.
///
/// `words.len()` must be a multiple of [`BLOCK_WORDS`]; every buffer
/// produced by [`crate::seal`] is.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[inline(always)]
pub fn xor_words(words: &mut [u64], seed: u64, site: u64) {
    debug_assert_eq!(words.len() % BLOCK_WORDS, 0);
    // SSE2 is baseline on x86_64; no runtime detection needed.
    unsafe { xor_words_sse2(words, seed, site) }
}

/// Toggle `words` between encoded and decoded (scalar fallback).
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
#[inline(always)]
pub fn xor_words(words: &mut [u64], seed: u64, site: u64) {
    debug_assert_eq!(words.len() % BLOCK_WORDS, 0);
    xor_words_scalar(words, seed, site);
}

/// Scalar word-by-word XOR through volatile accesses.
///
/// Always correct on every target; the vector path must produce identical
/// buffers.
#[inline(always)]
pub fn xor_words_scalar(words: &mut [u64], seed: u64, site: u64) {
    let ptr = core::hint::black_box(words.as_mut_ptr());
    let mut i = 0;
    while i < words.len() {
        unsafe {
            let w = ptr.add(i).read_volatile() ^ stream::word(seed, site, i as u64);
            ptr.add(i).write_volatile(w);
        }
        i += 1;
    }
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[inline(always)]
unsafe fn xor_words_sse2(words: &mut [u64], seed: u64, site: u64) {
    use core::arch::x86_64::{__m128i, _mm_loadu_si128, _mm_set_epi64x, _mm_storeu_si128, _mm_xor_si128};

    let ptr = core::hint::black_box(words.as_mut_ptr());
    let mut i = 0;
    while i + 1 < words.len() {
        let k0 = stream::word(seed, site, i as u64) as i64;
        let k1 = stream::word(seed, site, (i + 1) as u64) as i64;
        let key = _mm_set_epi64x(k1, k0);

        let block = ptr.add(i).cast::<__m128i>();
        let mixed = _mm_xor_si128(_mm_loadu_si128(block), key);
        _mm_storeu_si128(block, mixed);

        i += 2;
    }
}
