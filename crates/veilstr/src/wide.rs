//! Wide (UTF-16) literal support
//!
//! Windows API surfaces and other UTF-16 consumers need obfuscated wide
//! strings. The literal is converted code point by code point during
//! constant evaluation, packed two bytes per unit into the same 64-bit
//! word layout the byte variant uses, and sealed against the key stream.

use core::fmt;
use core::slice;

use veilstr_keys::{stream, BUILD_SEED};

use crate::encode::MAX_LITERAL_UNITS;
use crate::error::VeilstrResult;
use crate::xor::xor_words;

/// Decode the UTF-8 code point starting at `i`; returns (code point, next
/// index). `bytes` comes from a `&str`, so the sequence is known valid.
const fn next_code_point(bytes: &[u8], i: usize) -> (u32, usize) {
    let b0 = bytes[i] as u32;
    if b0 < 0x80 {
        (b0, i + 1)
    } else if b0 < 0xE0 {
        (((b0 & 0x1F) << 6) | (bytes[i + 1] as u32 & 0x3F), i + 2)
    } else if b0 < 0xF0 {
        (
            ((b0 & 0x0F) << 12) | ((bytes[i + 1] as u32 & 0x3F) << 6) | (bytes[i + 2] as u32 & 0x3F),
            i + 3,
        )
    } else {
        (
            ((b0 & 0x07) << 18)
                | ((bytes[i + 1] as u32 & 0x3F) << 12)
                | ((bytes[i + 2] as u32 & 0x3F) << 6)
                | (bytes[i + 3] as u32 & 0x3F),
            i + 4,
        )
    }
}

/// UTF-16 code unit count of `s`, terminator excluded.
pub const fn utf16_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut units = 0;
    while i < bytes.len() {
        let (cp, next) = next_code_point(bytes, i);
        units += if cp >= 0x1_0000 { 2 } else { 1 };
        i = next;
    }
    units
}

/// Sealed constant for a wide literal; length in UTF-16 units.
#[derive(Clone, Copy)]
pub struct SealedWide<const W: usize> {
    pub(crate) words: [u64; W],
    pub(crate) units: usize,
}

impl<const W: usize> SealedWide<W> {
    pub const fn words(&self) -> &[u64; W] {
        &self.words
    }

    pub const fn units(&self) -> usize {
        self.units
    }
}

/// Seal a string literal as NUL-terminated UTF-16 in `W` XORed words.
pub const fn seal_wide<const W: usize>(s: &str, seed: u64, site: u64) -> SealedWide<W> {
    let bytes = s.as_bytes();

    // Expand to code units first; the scratch buffer covers the largest
    // configurable ceiling.
    let mut scratch = [0u16; 256];
    let mut i = 0;
    let mut n = 0;
    while i < bytes.len() {
        let (cp, next) = next_code_point(bytes, i);
        if cp >= 0x1_0000 {
            let c = cp - 0x1_0000;
            scratch[n] = 0xD800 | (c >> 10) as u16;
            scratch[n + 1] = 0xDC00 | (c & 0x3FF) as u16;
            n += 2;
        } else {
            scratch[n] = cp as u16;
            n += 1;
        }
        i = next;
    }

    assert!(n + 1 <= MAX_LITERAL_UNITS, "wide literal exceeds MAX_LITERAL_UNITS");
    assert!((n + 1) * 2 <= W * 8, "word count too small for wide literal");

    let mut words = [0u64; W];
    let mut w = 0;
    while w < W {
        let mut chunk = [0u8; 8];
        let mut u = 0;
        while u < 4 {
            let idx = w * 4 + u;
            // Terminator and padding units are already zero.
            let unit = if idx < n { scratch[idx] } else { 0 };
            let ub = unit.to_ne_bytes();
            chunk[u * 2] = ub[0];
            chunk[u * 2 + 1] = ub[1];
            u += 1;
        }
        words[w] = u64::from_ne_bytes(chunk) ^ stream::word(seed, site, w as u64);
        w += 1;
    }

    SealedWide { words, units: n }
}

/// An obfuscated UTF-16 literal; the wide twin of
/// [`ObfString`](crate::ObfString).
#[derive(Clone, Copy)]
pub struct ObfWide<const W: usize, const SITE: u64> {
    words: [u64; W],
    units: usize,
}

impl<const W: usize, const SITE: u64> ObfWide<W, SITE> {
    /// Materialize the sealed constant into runtime storage (volatile
    /// copy, unless `static-seal` is enabled).
    #[inline(always)]
    pub fn new(sealed: &SealedWide<W>) -> Self {
        let mut words = [0u64; W];
        if cfg!(feature = "static-seal") {
            words = sealed.words;
        } else {
            let src = core::hint::black_box(sealed.words.as_ptr());
            let mut i = 0;
            while i < W {
                words[i] = unsafe { src.add(i).read_volatile() };
                i += 1;
            }
        }
        ObfWide { words, units: sealed.units }
    }

    /// Logical UTF-16 unit count, terminator excluded.
    #[inline]
    pub const fn size(&self) -> usize {
        self.units
    }

    /// Toggle encoded ⇄ decoded in place.
    #[inline(always)]
    pub fn crypt(&mut self) {
        xor_words(&mut self.words, BUILD_SEED, SITE);
    }

    /// Read-only view of `size()` units of the current buffer.
    #[inline]
    pub fn get(&self) -> &[u16] {
        unsafe { slice::from_raw_parts(self.words.as_ptr().cast::<u16>(), self.units) }
    }

    /// View including the NUL terminator unit, for LPCWSTR-style callees.
    #[inline]
    pub fn get_with_nul(&self) -> &[u16] {
        unsafe { slice::from_raw_parts(self.words.as_ptr().cast::<u16>(), self.units + 1) }
    }

    /// Toggle, then return the unit view.
    #[inline(always)]
    pub fn crypt_get(&mut self) -> &[u16] {
        self.crypt();
        self.get()
    }

    /// Decode, run `f` over the plaintext units, re-encode before
    /// returning.
    #[inline(always)]
    pub fn reveal<R>(mut self, f: impl FnOnce(&[u16]) -> R) -> R {
        self.crypt();
        let out = f(self.get());
        self.crypt();
        out
    }

    /// Checked conversion of the current buffer back to a `String`.
    pub fn decode_utf16(&self) -> VeilstrResult<String> {
        Ok(String::from_utf16(self.get())?)
    }

    /// Raw storage words, terminator and padding included.
    #[inline]
    pub fn raw_words(&self) -> &[u64] {
        &self.words
    }
}

impl<const W: usize, const SITE: u64> fmt::Debug for ObfWide<W, SITE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObfWide({} units)", self.units)
    }
}
