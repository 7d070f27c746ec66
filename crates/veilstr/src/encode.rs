//! Compile-time literal transform
//!
//! Packs a literal (plus NUL terminator) into 64-bit words, pads the tail
//! to a whole number of XOR blocks, and XORs every word against the key
//! stream. All of it runs during constant evaluation: the plaintext is
//! never written into the artifact as a contiguous run of bytes, only the
//! sealed words are.

use veilstr_keys::stream;

/// Words per XOR block. Storage is always a multiple of this, so the
/// runtime toggle can work in 128-bit chunks without a tail loop.
pub const BLOCK_WORDS: usize = 2;

/// Length ceiling in code units, terminator included.
///
/// Exceeding it fails the build inside the macro expansion; there is no
/// runtime check to reach.
pub const MAX_LITERAL_UNITS: usize = if cfg!(feature = "long-literals") { 256 } else { 96 };

/// Storage words needed for `bytes_with_nul` bytes, rounded up to whole
/// XOR blocks.
pub const fn word_count(bytes_with_nul: usize) -> usize {
    let words = (bytes_with_nul + 7) / 8;
    let rem = words % BLOCK_WORDS;
    let words = if rem == 0 { words } else { words + (BLOCK_WORDS - rem) };
    if words == 0 {
        BLOCK_WORDS
    } else {
        words
    }
}

/// The intermediate constant-evaluated object a container copies from.
///
/// Funnelling the encoded words through a dedicated `const` item keeps the
/// optimizer from re-deriving (and re-hoisting) the plaintext form at the
/// construction site.
#[derive(Clone, Copy)]
pub struct Sealed<const W: usize> {
    pub(crate) words: [u64; W],
    pub(crate) len: usize,
}

impl<const W: usize> Sealed<W> {
    /// Encoded words, for artifact inspection in tests and tooling.
    pub const fn words(&self) -> &[u64; W] {
        &self.words
    }

    /// Logical byte count, terminator excluded.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Seal a byte literal into `W` key-stream-XORed words.
///
/// The terminator and any padding bytes are zeros before the XOR, so the
/// whole buffer decodes deterministically; padding past `len` is simply
/// never handed out.
pub const fn seal<const W: usize>(text: &[u8], seed: u64, site: u64) -> Sealed<W> {
    assert!(text.len() + 1 <= MAX_LITERAL_UNITS, "literal exceeds MAX_LITERAL_UNITS");
    assert!(text.len() + 1 <= W * 8, "word count too small for literal");

    let mut words = [0u64; W];
    let mut w = 0;
    while w < W {
        let mut chunk = [0u8; 8];
        let mut b = 0;
        while b < 8 {
            let i = w * 8 + b;
            if i < text.len() {
                chunk[b] = text[i];
            }
            b += 1;
        }
        words[w] = u64::from_ne_bytes(chunk) ^ stream::word(seed, site, w as u64);
        w += 1;
    }

    Sealed { words, len: text.len() }
}
