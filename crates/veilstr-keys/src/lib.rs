//! Veilstr Keys - Build-specific key stream derivation
//!
//! This crate produces the pseudo-random words that literal obfuscation
//! XORs against:
//! - Build-identity seed folded from the build stamp
//! - Position-indexed PCG key stream
//! - Call-site salt so identical literals diverge per expansion
//!
//! Everything here is a `const fn`: key words are recomputed wherever they
//! are needed, at compile time and again at each decode, so no key table
//! ever lands in the binary as data.

pub mod seed;
pub mod site;
pub mod stream;

pub use seed::*;
pub use site::*;
pub use stream::*;
