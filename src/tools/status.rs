//! FoodScan Status Tool
//!
//! Provides runtime status information about the FoodScan service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Scanning instructions for AI assistants
pub const SCAN_INSTRUCTIONS: &str = r#"
# FoodScan Product Analysis Instructions

This guide explains how to check a packaged food using the FoodScan tools.

## Overview

FoodScan answers three questions about a product:
1. **Gluten** - does the ingredient list or allergen declaration mention a gluten source?
2. **Lactose** - does it mention milk or a milk derivative?
3. **Ultra-processed** - does it contain industrial additives, or is it NOVA group 4?

It also normalizes the per-100g nutrition table into display units.

---

## Looking Up a Barcode

**Tool:** `lookup_product`
- `barcode`: digits only (EAN-13, UPC-A, ...)
- Returns the full report: verdicts, NOVA description, nutrition summary and breakdown

If the product is not in the database, the tool returns an error. Ask the user for the
ingredient list and use `analyze_product` instead.

---

## Analyzing a Product by Hand

**Tool:** `analyze_product`
- `ingredients_text`: the ingredient list as printed
- `allergens`: the allergen declaration ("Contains: wheat, milk")
- `nova_group`: 1-4 if known. Negative values are rejected with an error; any other
  value is accepted, and only 4 or above counts as ultra-processed
- `nutriments`: per-100g values keyed like `"fat_100g"`, in grams (energy in kcal)

**IMPORTANT:** vitamins and minerals must be given in grams per 100g. A label reading
"Vitamin C 60 mg" is `"vitamin-c_100g": 0.06`.

---

## Reading the Verdicts

Each concern has `present` and `matched_terms`:
- Real matches are title-cased ingredient phrases, sorted alphabetically
- `"Listed in allergens"` means the concern came only from the allergen declaration
- `"NOVA Group 4 (Ultra-processed)"` means ultra-processing came only from the NOVA group

Matching is by substring, so "goats milk" also matches "oats". Mention this to the user
when a gluten verdict rests on a single short term.

---

## Other Tools

- `classify_ingredients` - verdicts for raw ingredient text only
- `normalize_nutrients` - nutrition breakdown only
- `describe_nova_group` - what a NOVA group means
- `foodscan_status` - build and process information
"#;

/// Runtime status of the FoodScan service
#[derive(Debug, Clone, Serialize)]
pub struct FoodScanStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Lookup information
    pub api_base_url: String,
    pub lookups_performed: u64,
    pub lookups_failed: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    api_base_url: String,
    lookups_performed: u64,
    lookups_failed: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            api_base_url: api_base_url.into(),
            lookups_performed: 0,
            lookups_failed: 0,
        }
    }

    /// Record the outcome of one barcode lookup
    pub fn record_lookup(&mut self, succeeded: bool) {
        self.lookups_performed += 1;
        if !succeeded {
            self.lookups_failed += 1;
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FoodScanStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FoodScanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            api_base_url: self.api_base_url.clone(),
            lookups_performed: self.lookups_performed,
            lookups_failed: self.lookups_failed,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
