//! Nutrient units and lookup tables
//!
//! Upstream nutriment values are per 100g in base units (grams, or kcal for energy).
//! Each table entry names the display unit and the factor that converts into it.

use serde::{Deserialize, Serialize};

/// Display unit of a normalized nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientUnit {
    Kcal,
    Gram,
    Milligram,
    Microgram,
}

impl NutrientUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            NutrientUnit::Kcal => "kcal",
            NutrientUnit::Gram => "g",
            NutrientUnit::Milligram => "mg",
            NutrientUnit::Microgram => "μg",
        }
    }

    /// Factor from the upstream base unit into this unit
    pub fn multiplier(&self) -> f64 {
        match self {
            NutrientUnit::Kcal | NutrientUnit::Gram => 1.0,
            NutrientUnit::Milligram => MG_PER_G,
            NutrientUnit::Microgram => UG_PER_G,
        }
    }
}

// ============================================================================
// Mass Conversion Constants
// ============================================================================

/// Milligrams per gram
pub const MG_PER_G: f64 = 1_000.0;
/// Micrograms per gram
pub const UG_PER_G: f64 = 1_000_000.0;

/// Table entry mapping an upstream nutriment key to its display form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: NutrientUnit,
}

impl NutrientSpec {
    const fn new(key: &'static str, label: &'static str, unit: NutrientUnit) -> Self {
        Self { key, label, unit }
    }

    /// Convert an upstream value into the display unit
    pub fn convert(&self, value: f64) -> f64 {
        value * self.unit.multiplier()
    }
}

use NutrientUnit::{Gram, Kcal, Microgram, Milligram};

/// Upstream key for energy in kcal
pub const ENERGY_KCAL_KEY: &str = "energy-kcal_100g";

// ============================================================================
// Tables (display order)
// ============================================================================

pub const MACRONUTRIENTS: &[NutrientSpec] = &[
    NutrientSpec::new(ENERGY_KCAL_KEY, "Calories", Kcal),
    NutrientSpec::new("fat_100g", "Total Fat", Gram),
    NutrientSpec::new("saturated-fat_100g", "Saturated Fat", Gram),
    NutrientSpec::new("trans-fat_100g", "Trans Fat", Gram),
    /// Upstream reports cholesterol in grams like every other mass; shown in mg
    NutrientSpec::new("cholesterol_100g", "Cholesterol", Milligram),
    NutrientSpec::new("carbohydrates_100g", "Carbohydrates", Gram),
    NutrientSpec::new("sugars_100g", "Sugars", Gram),
    NutrientSpec::new("fiber_100g", "Fiber", Gram),
    NutrientSpec::new("proteins_100g", "Protein", Gram),
    NutrientSpec::new("sodium_100g", "Sodium", Milligram),
];

pub const VITAMINS: &[NutrientSpec] = &[
    NutrientSpec::new("vitamin-a_100g", "Vitamin A", Microgram),
    NutrientSpec::new("vitamin-b1_100g", "Vitamin B1", Milligram),
    NutrientSpec::new("vitamin-b2_100g", "Vitamin B2", Milligram),
    NutrientSpec::new("vitamin-b3_100g", "Vitamin B3", Milligram),
    NutrientSpec::new("vitamin-b6_100g", "Vitamin B6", Milligram),
    NutrientSpec::new("vitamin-b9_100g", "Folate (B9)", Microgram),
    NutrientSpec::new("vitamin-b12_100g", "Vitamin B12", Microgram),
    NutrientSpec::new("vitamin-c_100g", "Vitamin C", Milligram),
    NutrientSpec::new("vitamin-d_100g", "Vitamin D", Microgram),
    NutrientSpec::new("vitamin-e_100g", "Vitamin E", Milligram),
    NutrientSpec::new("vitamin-k_100g", "Vitamin K", Microgram),
];

pub const MINERALS: &[NutrientSpec] = &[
    NutrientSpec::new("calcium_100g", "Calcium", Milligram),
    NutrientSpec::new("iron_100g", "Iron", Milligram),
    NutrientSpec::new("magnesium_100g", "Magnesium", Milligram),
    NutrientSpec::new("phosphorus_100g", "Phosphorus", Milligram),
    NutrientSpec::new("potassium_100g", "Potassium", Milligram),
    NutrientSpec::new("zinc_100g", "Zinc", Milligram),
    NutrientSpec::new("copper_100g", "Copper", Milligram),
    NutrientSpec::new("manganese_100g", "Manganese", Milligram),
    NutrientSpec::new("selenium_100g", "Selenium", Microgram),
    NutrientSpec::new("iodine_100g", "Iodine", Microgram),
];

/// Short summary shown alongside the verdicts
pub const SUMMARY: &[NutrientSpec] = &[
    NutrientSpec::new(ENERGY_KCAL_KEY, "Calories", Kcal),
    NutrientSpec::new("carbohydrates_100g", "Carbs", Gram),
    NutrientSpec::new("proteins_100g", "Protein", Gram),
    NutrientSpec::new("fat_100g", "Fat", Gram),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_for_key(key: &str) -> Option<&'static NutrientSpec> {
        MACRONUTRIENTS
            .iter()
            .chain(VITAMINS)
            .chain(MINERALS)
            .find(|s| s.key == key)
    }

    #[test]
    fn test_unit_multipliers() {
        assert_eq!(NutrientUnit::Gram.multiplier(), 1.0);
        assert_eq!(NutrientUnit::Milligram.multiplier(), 1_000.0);
        assert_eq!(NutrientUnit::Microgram.multiplier(), 1_000_000.0);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(MACRONUTRIENTS.len(), 10);
        assert_eq!(VITAMINS.len(), 11);
        assert_eq!(MINERALS.len(), 10);
    }

    #[test]
    fn test_microgram_nutrients() {
        let micro: Vec<&str> = VITAMINS
            .iter()
            .chain(MINERALS)
            .filter(|s| s.unit == NutrientUnit::Microgram)
            .map(|s| s.label)
            .collect();
        assert_eq!(
            micro,
            vec!["Vitamin A", "Folate (B9)", "Vitamin B12", "Vitamin D", "Vitamin K", "Selenium", "Iodine"]
        );
    }

    #[test]
    fn test_spec_for_key() {
        let sodium = spec_for_key("sodium_100g").unwrap();
        assert_eq!(sodium.unit.symbol(), "mg");
        assert!((sodium.convert(0.4) - 400.0).abs() < 1e-9);
        assert!(spec_for_key("salt_100g").is_none());
    }

    #[test]
    fn test_cholesterol_scaled_to_milligrams() {
        let cholesterol = spec_for_key("cholesterol_100g").unwrap();
        assert_eq!(cholesterol.unit, NutrientUnit::Milligram);
        assert!((cholesterol.convert(0.045) - 45.0).abs() < 1e-9);
    }
}
