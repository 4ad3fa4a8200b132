//! Build script for Fitplan
//!
//! Embeds a per-checkout build counter and the compile time. The counter
//! lives in `OUT_DIR`, so it resets after `cargo clean` and never touches
//! the source tree.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=data/exercises.json");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let counter = out_dir.join("build_number");

    let previous: u64 = fs::read_to_string(&counter)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    fs::write(&counter, build_number.to_string()).expect("Failed to write build counter");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=FITPLAN_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=FITPLAN_BUILD_TIMESTAMP={}", timestamp);
}
