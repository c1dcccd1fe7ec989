//! Nutrition normalization module
//!
//! Handles nutrient unit conversion and display formatting.

pub mod converter;
pub mod units;

pub use converter::{decimal_places, format_value, normalize, summarize};
pub use units::{NutrientSpec, NutrientUnit, MACRONUTRIENTS, MINERALS, VITAMINS};
