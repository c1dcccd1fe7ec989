//! Compile-time build metadata

use serde::Serialize;

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_NUMBER: &str = env!("FOODSCAN_BUILD_NUMBER");

/// UTC compile time, ISO 8601
pub const BUILD_TIMESTAMP: &str = env!("FOODSCAN_BUILD_TIMESTAMP");

/// Version and build stamp reported by `foodscan_status` and the banner
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_number: BUILD_NUMBER.parse().unwrap_or(0),
            build_timestamp: BUILD_TIMESTAMP,
        }
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("FoodScan {} (build {}, {})", info.version, info.build_number, info.build_timestamp);
    eprintln!("Serving ingredient and nutrition analysis over MCP stdio");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stamp_is_embedded() {
        let info = BuildInfo::current();
        assert_eq!(NAME, "foodscan");
        assert_eq!(info.version, VERSION);
        assert_eq!(BUILD_NUMBER.parse::<u64>().ok(), Some(info.build_number));
        assert!(BUILD_TIMESTAMP.ends_with('Z'));
    }
}
