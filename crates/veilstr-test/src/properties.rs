//! Property tests over the seal/XOR kernel
//!
//! `seal` and `xor_words` are const fns, so the same code paths the
//! compile-time expansion runs can be driven at runtime with arbitrary
//! inputs. The properties mirror the container contract: decode restores
//! every byte including the terminator, a second toggle restores the
//! ciphertext, and seed or site changes rewrite the whole buffer.

use proptest::prelude::*;

use veilstr::{seal, word_count, xor_words, MAX_LITERAL_UNITS};

/// Largest storage any in-ceiling literal can need.
const MAX_WORDS: usize = word_count(MAX_LITERAL_UNITS);

fn decode(words: &mut [u64; MAX_WORDS], seed: u64, site: u64) -> Vec<u8> {
    xor_words(words, seed, site);
    words.iter().flat_map(|w| w.to_ne_bytes()).collect()
}

proptest! {
    #[test]
    fn prop_round_trip_restores_text_and_terminator(
        text in proptest::collection::vec(any::<u8>(), 0..MAX_LITERAL_UNITS),
        seed: u64,
        site: u64,
    ) {
        let sealed = seal::<MAX_WORDS>(&text, seed, site);
        prop_assert_eq!(sealed.len(), text.len());

        let mut words = *sealed.words();
        let plain = decode(&mut words, seed, site);

        prop_assert_eq!(&plain[..text.len()], &text[..]);
        // Terminator and padding decode to zero.
        prop_assert!(plain[text.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn prop_double_toggle_is_identity(
        text in proptest::collection::vec(any::<u8>(), 1..MAX_LITERAL_UNITS),
        seed: u64,
        site: u64,
    ) {
        let sealed = seal::<MAX_WORDS>(&text, seed, site);
        let mut words = *sealed.words();

        xor_words(&mut words, seed, site);
        xor_words(&mut words, seed, site);

        prop_assert_eq!(&words, sealed.words());
    }

    #[test]
    fn prop_single_toggle_changes_buffer(
        text in proptest::collection::vec(any::<u8>(), 1..MAX_LITERAL_UNITS),
        seed: u64,
        site: u64,
    ) {
        let sealed = seal::<MAX_WORDS>(&text, seed, site);
        let mut words = *sealed.words();
        xor_words(&mut words, seed, site);
        prop_assert_ne!(&words, sealed.words());
    }

    #[test]
    fn prop_seed_variation_rewrites_ciphertext(
        text in proptest::collection::vec(any::<u8>(), 0..MAX_LITERAL_UNITS),
        seed: u64,
        site: u64,
    ) {
        // Same source, two build identities: different encoded buffers,
        // identical plaintexts. Bit 0 of the effective seed is absorbed
        // by the stream's odd increment, so flip a higher bit.
        let a = seal::<MAX_WORDS>(&text, seed, site);
        let b = seal::<MAX_WORDS>(&text, seed ^ 2, site);
        prop_assert_ne!(a.words(), b.words());

        let mut wa = *a.words();
        let mut wb = *b.words();
        let pa = decode(&mut wa, seed, site);
        let pb = decode(&mut wb, seed ^ 2, site);
        prop_assert_eq!(pa, pb);
    }

    #[test]
    fn prop_ciphertext_is_plaintext_xor_stream(
        text in proptest::collection::vec(any::<u8>(), 0..MAX_LITERAL_UNITS),
        seed: u64,
        site: u64,
    ) {
        // Cross-check the seal against the key stream derived directly:
        // every sealed word must be exactly plaintext ^ word(position).
        let sealed = seal::<MAX_WORDS>(&text, seed, site);
        for (pos, &cipher) in sealed.words().iter().enumerate() {
            let mut chunk = [0u8; 8];
            for (b, slot) in chunk.iter_mut().enumerate() {
                let i = pos * 8 + b;
                if i < text.len() {
                    *slot = text[i];
                }
            }
            let plain = u64::from_ne_bytes(chunk);
            let key = veilstr_keys::stream::word(seed, site, pos as u64);
            prop_assert_eq!(cipher, plain ^ key);
        }
    }

    #[test]
    fn prop_site_variation_rewrites_ciphertext(
        text in proptest::collection::vec(any::<u8>(), 0..MAX_LITERAL_UNITS),
        seed: u64,
        site: u64,
    ) {
        let a = seal::<MAX_WORDS>(&text, seed, site);
        let b = seal::<MAX_WORDS>(&text, seed, site ^ 0x9e37_79b9_7f4a_7c15);
        prop_assert_ne!(a.words(), b.words());
    }
}
