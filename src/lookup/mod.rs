//! Lookup module
//!
//! Fetches product records from the product database.

pub mod client;

pub use client::{decode_product, validate_barcode, LookupError, LookupResult, ProductClient};
