//! Veilstr - Compile-time string literal obfuscation
//!
//! Hides string literals from static inspection of the compiled binary
//! while keeping them usable as ordinary strings at runtime:
//! - [`obf!`] / [`obf_wide!`] capture a literal at the call site
//! - the literal is XORed against a build-specific key stream during
//!   constant evaluation, so the cleartext never appears contiguously in
//!   the artifact
//! - the resulting [`ObfString`] / [`ObfWide`] lives on the stack and
//!   toggles between ciphertext and plaintext in place via `crypt()`
//!
//! The key stream derives from the build stamp, so every build of the same
//! source carries different constants; every call site gets its own
//! stream, so identical literals do not correlate. This is obfuscation,
//! not cryptography: the scheme resists string scanners and casual
//! disassembly, not an attacker who controls the build or attaches a
//! debugger at the moment of use.
//!
//! ```
//! let mut greeting = veilstr::obf!("hello");
//! assert_eq!(greeting.size(), 5);
//! assert_eq!(greeting.crypt_get(), b"hello");
//! greeting.crypt(); // back to ciphertext for the rest of the lifetime
//! ```
//!
//! The recommended idiom scopes the plaintext window instead of relying on
//! the caller to re-encode:
//!
//! ```
//! let n = veilstr::obf!("hello").reveal(|s| s.len());
//! assert_eq!(n, 5);
//! ```

pub mod container;
pub mod encode;
pub mod error;
pub mod wide;
pub mod xor;

mod macros;

pub use container::ObfString;
pub use encode::{seal, word_count, Sealed, BLOCK_WORDS, MAX_LITERAL_UNITS};
pub use error::{VeilstrError, VeilstrResult};
pub use wide::{seal_wide, utf16_len, ObfWide, SealedWide};
pub use xor::xor_words;

/// Key stream primitives, re-exported for the macro expansions.
pub use veilstr_keys as keys;
