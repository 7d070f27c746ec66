//! Artifact inspection helpers
//!
//! Small utilities for checking that a plaintext never shows up in a
//! buffer the way a string scanner would find it. Used by the tests here
//! and handy when eyeballing a compiled binary's sections.

/// True if `needle` occurs contiguously anywhere in `haystack`.
pub fn contains_sequence(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Flatten storage words into the byte image they occupy in memory.
pub fn words_as_bytes(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_ne_bytes()).collect()
}
