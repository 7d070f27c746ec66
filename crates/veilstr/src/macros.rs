//! Call-site macros
//!
//! The only supported way to build a container: capture a string literal,
//! validate its length during constant evaluation, seal it under this
//! build's seed and this expansion's salt, and hand back the container as
//! a single inline expression.

/// Obfuscate a string literal into an [`ObfString`](crate::ObfString).
///
/// The literal (plus NUL terminator) is sealed entirely at compile time;
/// the expansion is an expression and needs no named temporary:
///
/// ```
/// assert_eq!(veilstr::obf!("hello").reveal(|s| s.to_vec()), b"hello");
/// ```
///
/// Two expansions of the same text are sealed under different call-site
/// salts and share no ciphertext.
///
/// Literals longer than [`MAX_LITERAL_UNITS`](crate::MAX_LITERAL_UNITS)
/// minus the terminator are rejected at compile time:
///
/// ```compile_fail
/// // 96 'a's: one unit past the default ceiling once the terminator counts.
/// let s = veilstr::obf!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
/// ```
#[macro_export]
macro_rules! obf {
    ($lit:literal) => {{
        const __VEILSTR_UNITS: usize = $lit.len() + 1;
        const _: () = assert!(
            __VEILSTR_UNITS <= $crate::MAX_LITERAL_UNITS,
            "obf!: literal exceeds MAX_LITERAL_UNITS"
        );
        const __VEILSTR_SITE: u64 =
            $crate::keys::site_key(::core::file!(), ::core::line!(), ::core::column!());
        const __VEILSTR_WORDS: usize = $crate::word_count(__VEILSTR_UNITS);
        const __VEILSTR_SEALED: $crate::Sealed<__VEILSTR_WORDS> = $crate::seal::<__VEILSTR_WORDS>(
            $lit.as_bytes(),
            $crate::keys::BUILD_SEED,
            __VEILSTR_SITE,
        );
        $crate::ObfString::<__VEILSTR_WORDS, __VEILSTR_SITE>::new(&__VEILSTR_SEALED)
    }};
}

/// Obfuscate a string literal as NUL-terminated UTF-16 into an
/// [`ObfWide`](crate::ObfWide).
///
/// ```
/// let expected: Vec<u16> = "japan 日本".encode_utf16().collect();
/// assert_eq!(veilstr::obf_wide!("japan 日本").reveal(|u| u.to_vec()), expected);
/// ```
///
/// The ceiling applies in UTF-16 units:
///
/// ```compile_fail
/// let s = veilstr::obf_wide!("𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞𝄞");
/// ```
#[macro_export]
macro_rules! obf_wide {
    ($lit:literal) => {{
        const __VEILSTR_UNITS: usize = $crate::utf16_len($lit) + 1;
        const _: () = assert!(
            __VEILSTR_UNITS <= $crate::MAX_LITERAL_UNITS,
            "obf_wide!: literal exceeds MAX_LITERAL_UNITS"
        );
        const __VEILSTR_SITE: u64 =
            $crate::keys::site_key(::core::file!(), ::core::line!(), ::core::column!());
        const __VEILSTR_WORDS: usize = $crate::word_count(__VEILSTR_UNITS * 2);
        const __VEILSTR_SEALED: $crate::SealedWide<__VEILSTR_WORDS> =
            $crate::seal_wide::<__VEILSTR_WORDS>(
                $lit,
                $crate::keys::BUILD_SEED,
                __VEILSTR_SITE,
            );
        $crate::ObfWide::<__VEILSTR_WORDS, __VEILSTR_SITE>::new(&__VEILSTR_SEALED)
    }};
}
