//! Display-ready nutrient readings

use serde::{Deserialize, Serialize};

/// One normalized nutrient reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientFact {
    pub label: String,
    /// Converted value, rounded to its display precision
    pub value: f64,
    pub unit: String,
    /// The value as it should be shown (e.g. "0.50", "60")
    pub formatted: String,
}

/// Normalized nutrients grouped for display
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionBreakdown {
    pub macronutrients: Vec<NutrientFact>,
    pub vitamins: Vec<NutrientFact>,
    pub minerals: Vec<NutrientFact>,
}

impl NutritionBreakdown {
    pub fn is_empty(&self) -> bool {
        self.macronutrients.is_empty() && self.vitamins.is_empty() && self.minerals.is_empty()
    }

    /// Look up a fact by label across all groups
    pub fn find(&self, label: &str) -> Option<&NutrientFact> {
        self.macronutrients
            .iter()
            .chain(&self.vitamins)
            .chain(&self.minerals)
            .find(|f| f.label == label)
    }
}
