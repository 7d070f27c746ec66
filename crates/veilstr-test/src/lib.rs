//! Veilstr Test Harness - Cross-crate validation
//!
//! This crate exercises the public surface the way a consumer does:
//! - Macro expansions in a foreign crate (`$crate` hygiene)
//! - Round-trip, state-toggle and size invariants
//! - Property tests over the word-level seal/XOR kernel
//! - Benchmarks for the runtime toggle

pub mod inspect;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod roundtrip;
