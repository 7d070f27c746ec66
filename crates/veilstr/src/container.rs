//! Obfuscated string container
//!
//! A stack-resident buffer of sealed words plus the logical length. Two
//! representation states, ciphertext and plaintext, with a single toggle
//! between them; the container itself does not track which state it is in,
//! the caller does.

use core::fmt;
use core::slice;

use veilstr_keys::BUILD_SEED;

use crate::encode::Sealed;
use crate::error::VeilstrResult;
use crate::xor::xor_words;

/// An obfuscated byte-string literal.
///
/// `W` is the storage size in 64-bit words, `SITE` the call-site salt;
/// both are baked into the type by the [`obf!`](crate::obf) expansion, so
/// the key words the toggle regenerates are compile-time constants at
/// every use. Instances start in the encoded state.
///
/// Copies carry independent buffers; nothing is shared between instances.
#[derive(Clone, Copy)]
pub struct ObfString<const W: usize, const SITE: u64> {
    words: [u64; W],
    len: usize,
}

impl<const W: usize, const SITE: u64> ObfString<W, SITE> {
    /// Materialize the sealed constant into runtime storage.
    ///
    /// The copy goes through a laundered pointer with volatile reads so
    /// the optimizer cannot treat the storage as a second name for the
    /// constant and hoist it out of the call site. With the `static-seal`
    /// feature the words are copied plainly and may stay in rodata.
    #[inline(always)]
    pub fn new(sealed: &Sealed<W>) -> Self {
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
        ObfString { words, len: sealed.len }
    }

    /// Logical byte count, terminator excluded. Constant for the
    /// container's lifetime.
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Toggle encoded ⇄ decoded in place.
    ///
    /// Recomputes the key stream from the build seed and the call-site
    /// salt; nothing about the keys is stored in the container.
    #[inline(always)]
    pub fn crypt(&mut self) {
        xor_words(&mut self.words, BUILD_SEED, SITE);
    }

    /// Read-only view of `size()` bytes of the current buffer.
    ///
    /// No state change: while encoded this yields ciphertext, not an
    /// error.
    #[inline]
    pub fn get(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), self.len) }
    }

    /// Like [`get`](Self::get) but including the NUL terminator, for
    /// handing to C interfaces.
    #[inline]
    pub fn get_with_nul(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), self.len + 1) }
    }

    /// Toggle, then return the buffer view.
    ///
    /// The usual decode-and-use pattern; call [`crypt`](Self::crypt)
    /// again afterwards or the plaintext stays resident for the rest of
    /// the instance's lifetime.
    #[inline(always)]
    pub fn crypt_get(&mut self) -> &[u8] {
        self.crypt();
        self.get()
    }

    /// Decode, run `f` over the plaintext, re-encode before returning.
    ///
    /// Consumes the container so the plaintext window is exactly the
    /// closure call.
    #[inline(always)]
    pub fn reveal<R>(mut self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.crypt();
        let out = f(self.get());
        self.crypt();
        out
    }

    /// Checked `&str` view of the current buffer.
    ///
    /// Fails while encoded (unless the ciphertext happens to be valid
    /// UTF-8, which is indistinguishable from misuse by design).
    pub fn to_str(&self) -> VeilstrResult<&str> {
        Ok(core::str::from_utf8(self.get())?)
    }

    /// Raw storage words, terminator and padding included. For inspecting
    /// what actually lands in memory.
    #[inline]
    pub fn raw_words(&self) -> &[u64] {
        &self.words
    }
}

// The Debug form never prints the buffer: a stray `{:?}` in a log line
// must not leak either representation.
impl<const W: usize, const SITE: u64> fmt::Debug for ObfString<W, SITE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObfString({} bytes)", self.len)
    }
}
