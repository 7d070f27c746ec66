//! End-to-end macro tests from a consuming crate
//!
//! Everything here goes through `veilstr::obf!` / `obf_wide!` exactly as
//! application code would, covering the testable properties end to end:
//! round-trip, toggle idempotence, size invariance, per-site independence
//! and the ciphertext-at-rest guarantee.

use crate::inspect::{contains_sequence, words_as_bytes};

#[test]
fn test_hello_scenario() {
    // "hello" is 6 bytes with the terminator; size() reports 5.
    let mut s = veilstr::obf!("hello");
    assert_eq!(s.size(), 5);

    let decoded = s.crypt_get();
    assert_eq!(decoded, b"hello");
    assert_eq!(s.get_with_nul(), b"hello\0");

    s.crypt();
    assert_ne!(s.get(), b"hello");
}

#[test]
fn test_round_trip_assorted_literals() {
    macro_rules! check {
        ($text:literal) => {{
            let mut s = veilstr::obf!($text);
            assert_eq!(s.size(), $text.len());
            assert_eq!(s.crypt_get(), $text.as_bytes());
            s.crypt();
        }};
    }

    check!("");
    check!("a");
    check!("ab");
    check!("0123456");
    check!("01234567");
    check!("exactly sixteen!");
    check!("https://update.example.com/v2/manifest.json");
    check!("a literal that is long enough to need multiple full xor blocks of storage");
}

#[test]
fn test_double_crypt_is_identity_single_is_not() {
    let mut s = veilstr::obf!("toggle me");
    let encoded = s.raw_words().to_vec();

    s.crypt();
    assert_ne!(s.raw_words(), &encoded[..], "one toggle must change the buffer");

    s.crypt();
    assert_eq!(s.raw_words(), &encoded[..], "two toggles must restore it");
}

#[test]
fn test_resting_buffer_never_contains_plaintext() {
    let s = veilstr::obf!("TOP-SECRET-MARKER");
    let resting = words_as_bytes(s.raw_words());
    assert!(!contains_sequence(&resting, b"TOP-SECRET-MARKER"));
}

#[test]
fn test_call_sites_do_not_correlate() {
    let a = veilstr::obf!("correlate me");
    let b = veilstr::obf!("correlate me");

    let ca = words_as_bytes(a.raw_words());
    let cb = words_as_bytes(b.raw_words());
    assert_ne!(ca, cb, "two sites sealing the same text must not share ciphertext");

    assert_eq!(a.reveal(|s| s.to_vec()), b.reveal(|s| s.to_vec()));
}

#[test]
fn test_reveal_reencodes_before_returning() {
    let s = veilstr::obf!("ephemeral");
    let resting = s.raw_words().to_vec();
    let got = s.reveal(|plain| {
        assert_eq!(plain, b"ephemeral");
        plain.len()
    });
    assert_eq!(got, 9);
    assert_eq!(s.raw_words(), &resting[..]);
}

#[test]
fn test_to_str_checked_conversion() {
    let mut s = veilstr::obf!("utf-8 text ✓");
    s.crypt();
    assert_eq!(s.to_str().unwrap(), "utf-8 text ✓");
}

#[test]
fn test_wide_round_trip() {
    let mut w = veilstr::obf_wide!("C:\\Windows\\System32\\ntdll.dll");
    let expected: Vec<u16> = "C:\\Windows\\System32\\ntdll.dll".encode_utf16().collect();

    assert_eq!(w.size(), expected.len());
    assert_eq!(w.crypt_get(), &expected[..]);
    assert_eq!(w.get_with_nul().last(), Some(&0));

    assert_eq!(w.decode_utf16().unwrap(), "C:\\Windows\\System32\\ntdll.dll");

    w.crypt();
    assert_ne!(w.get(), &expected[..]);
}

#[test]
fn test_wide_surrogate_pairs() {
    let expected: Vec<u16> = "clef: 𝄞".encode_utf16().collect();
    let got = veilstr::obf_wide!("clef: 𝄞").reveal(|u| u.to_vec());
    assert_eq!(got, expected);
}

#[test]
fn test_container_is_copy_with_independent_buffers() {
    let mut a = veilstr::obf!("copy me");
    let b = a;
    a.crypt();
    assert_eq!(a.get(), b"copy me");
    assert_ne!(b.get(), b"copy me");
}
