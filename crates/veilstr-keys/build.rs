//! Injects the build-identity stamp that seeds every key stream.
//!
//! The stamp is the only external input to the whole system: it changes on
//! every fresh build, so obfuscated constants differ across builds of the
//! same source. Setting `VEILSTR_BUILD_STAMP` in the environment pins the
//! stamp for reproducible builds.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=VEILSTR_BUILD_STAMP");

    let stamp = match env::var("VEILSTR_BUILD_STAMP") {
        Ok(s) if !s.is_empty() => s,
        _ => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system clock before unix epoch");
            format!("{}", now.as_nanos())
        }
    };

    println!("cargo:rustc-env=VEILSTR_BUILD_STAMP={stamp}");
}
