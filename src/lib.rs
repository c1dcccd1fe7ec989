//! FoodScan Library
//!
//! Gluten, lactose and ultra-processing checks for packaged foods, plus nutrition
//! normalization for display.

pub mod analysis;
pub mod build_info;
pub mod config;
pub mod lookup;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use analysis::{analyze_product, classify_text};
pub use nutrition::normalize;
