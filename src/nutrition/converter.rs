//! Nutrient normalization
//!
//! Converts raw nutriment readings into display-ready facts using the tables in
//! [`super::units`] and a single adaptive-precision formatter.

use super::units::{NutrientSpec, NutrientUnit, MACRONUTRIENTS, MINERALS, SUMMARY, VITAMINS};
use crate::models::{NutrientFact, Nutriments, NutritionBreakdown};

/// Number of decimal places used to display a converted value
///
/// - `0 < v < 0.01` -> 3
/// - `v < 1` -> 2
/// - `v < 10` -> 1
/// - otherwise 0
pub fn decimal_places(value: f64) -> usize {
    if value > 0.0 && value < 0.01 {
        3
    } else if value < 1.0 {
        2
    } else if value < 10.0 {
        1
    } else {
        0
    }
}

/// Round a value to the given number of decimal places
fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Format a converted value at its adaptive precision.
///
/// Returns the rounded numeric value and its display string, e.g. `0.5` ->
/// `(0.5, "0.50")` and `50.0` -> `(50.0, "50")`.
pub fn format_value(value: f64) -> (f64, String) {
    let places = decimal_places(value);
    let rounded = round_to(value, places);
    (rounded, format!("{:.*}", places, rounded))
}

/// Energy is shown as a whole number of kcal
fn format_energy(kcal: f64) -> (f64, String) {
    let rounded = kcal.round();
    (rounded, format!("{}", rounded as i64))
}

/// Build a fact for one table entry, if the reading is present
fn fact_for(spec: &NutrientSpec, nutriments: &Nutriments) -> Option<NutrientFact> {
    let raw = nutriments.get(spec.key)?;
    let converted = spec.convert(raw);
    let (value, formatted) = match spec.unit {
        NutrientUnit::Kcal => format_energy(converted),
        _ => format_value(converted),
    };

    Some(NutrientFact {
        label: spec.label.to_string(),
        value,
        unit: spec.unit.symbol().to_string(),
        formatted,
    })
}

fn facts_for(table: &[NutrientSpec], nutriments: &Nutriments) -> Vec<NutrientFact> {
    table.iter().filter_map(|spec| fact_for(spec, nutriments)).collect()
}

/// Normalize a nutrient record into macronutrients, vitamins and minerals.
///
/// Missing readings are skipped; each group keeps table order.
pub fn normalize(nutriments: &Nutriments) -> NutritionBreakdown {
    NutritionBreakdown {
        macronutrients: facts_for(MACRONUTRIENTS, nutriments),
        vitamins: facts_for(VITAMINS, nutriments),
        minerals: facts_for(MINERALS, nutriments),
    }
}

/// Short summary of energy and the three main macronutrients.
///
/// Zero readings are left out along with missing ones.
pub fn summarize(nutriments: &Nutriments) -> Vec<NutrientFact> {
    SUMMARY
        .iter()
        .filter(|spec| nutriments.get(spec.key).is_some_and(|v| v != 0.0))
        .filter_map(|spec| fact_for(spec, nutriments))
        .collect()
}
