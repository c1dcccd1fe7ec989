//! Build script for FoodScan
//!
//! Embeds the build number and compile timestamp. The counter lives in `OUT_DIR`,
//! so the source tree is never written; `FOODSCAN_BUILD_NUMBER` overrides it in CI.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn next_build_number() -> Result<u64, Box<dyn Error>> {
    let counter = PathBuf::from(env::var("OUT_DIR")?).join("build_number");
    let previous: u64 = fs::read_to_string(&counter)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let next = previous + 1;
    fs::write(&counter, next.to_string())?;
    Ok(next)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=FOODSCAN_BUILD_NUMBER");

    let build_number = match env::var("FOODSCAN_BUILD_NUMBER") {
        Ok(n) => n.trim().parse::<u64>()?,
        Err(_) => next_build_number()?,
    };
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=FOODSCAN_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=FOODSCAN_BUILD_TIMESTAMP={}", timestamp);
    Ok(())
}
