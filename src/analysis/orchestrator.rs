//! Product classification
//!
//! Combines ingredient text matches with the declared allergens and the NOVA
//! processing group into the final verdicts.

use super::classifier::classify_text;
use super::lexicon::Concern;
use crate::models::{
    AnalysisResult, ConcernVerdicts, ProductRecord, ALLERGEN_PLACEHOLDER, NOVA_PLACEHOLDER,
};

/// Lowest NOVA group treated as ultra-processed
pub const ULTRA_PROCESSED_NOVA_GROUP: i64 = 4;

const GLUTEN_ALLERGEN_KEYWORDS: &[&str] = &["gluten", "wheat"];
const LACTOSE_ALLERGEN_KEYWORDS: &[&str] = &["milk", "lactose"];

/// Analyze a product record.
///
/// Never fails: every missing field is treated as a negative signal.
pub fn analyze_product(record: &ProductRecord) -> AnalysisResult {
    let verdicts = classify_text(record.ingredients_text.as_deref());
    let verdicts = apply_allergen_override(&verdicts, record.allergens.as_deref());
    let verdicts = apply_processing_override(&verdicts, record.nova_group);

    AnalysisResult::new(verdicts, record.nova_group, record.clone())
}

/// Mark gluten/lactose present when the allergen declaration names them
fn apply_allergen_override(verdicts: &ConcernVerdicts, allergens: Option<&str>) -> ConcernVerdicts {
    let Some(allergens) = allergens.map(str::to_lowercase) else {
        return verdicts.clone();
    };

    let declares = |keywords: &[&str]| keywords.iter().any(|k| allergens.contains(k));

    let mut next = verdicts.clone();
    for (concern, keywords) in [
        (Concern::Gluten, GLUTEN_ALLERGEN_KEYWORDS),
        (Concern::Lactose, LACTOSE_ALLERGEN_KEYWORDS),
    ] {
        if declares(keywords) {
            let verdict = next.get(concern).with_signal(true, ALLERGEN_PLACEHOLDER);
            if verdict != *next.get(concern) {
                tracing::debug!("{} inferred from allergen declaration", concern.as_str());
            }
            next = next.with(concern, verdict);
        }
    }
    next
}

/// Mark the product ultra-processed when its NOVA group is 4 or higher
fn apply_processing_override(verdicts: &ConcernVerdicts, nova_group: Option<i64>) -> ConcernVerdicts {
    let by_nova = nova_group.unwrap_or(0) >= ULTRA_PROCESSED_NOVA_GROUP;
    if by_nova && !verdicts.ultra_processed.has_matches() {
        tracing::debug!("ultra-processed inferred from NOVA group {:?}", nova_group);
    }
    let verdict = verdicts.ultra_processed.with_signal(by_nova, NOVA_PLACEHOLDER);
    verdicts.with(Concern::UltraProcessed, verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConcernVerdict;

    fn record(ingredients: Option<&str>, allergens: Option<&str>, nova: Option<i64>) -> ProductRecord {
        ProductRecord {
            ingredients_text: ingredients.map(String::from),
            allergens: allergens.map(String::from),
            nova_group: nova,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_record() {
        let result = analyze_product(&ProductRecord::default());
        assert!(!result.contains_gluten());
        assert!(!result.contains_lactose());
        assert!(!result.is_ultra_processed());
        assert_eq!(result.nova_score, None);
    }

    #[test]
    fn test_allergen_placeholder_when_no_matches() {
        let result = analyze_product(&record(Some("rice, water"), Some("en:gluten, en:milk"), None));
        assert_eq!(result.gluten, ConcernVerdict::placeholder(ALLERGEN_PLACEHOLDER));
        assert_eq!(result.lactose, ConcernVerdict::placeholder(ALLERGEN_PLACEHOLDER));
        assert!(!result.is_ultra_processed());
    }

    #[test]
    fn test_allergen_keywords_case_insensitive() {
        let result = analyze_product(&record(None, Some("WHEAT, Lactose"), None));
        assert!(result.contains_gluten());
        assert!(result.contains_lactose());
    }

    #[test]
    fn test_allergen_does_not_duplicate_real_matches() {
        let result = analyze_product(&record(Some("barley, cheese"), Some("gluten, milk"), None));
        assert_eq!(result.gluten.matched_terms, vec!["Barley"]);
        assert_eq!(result.lactose.matched_terms, vec!["Cheese"]);
    }

    #[test]
    fn test_unrelated_allergens_ignored() {
        let result = analyze_product(&record(None, Some("en:soybeans, en:nuts"), None));
        assert!(!result.contains_gluten());
        assert!(!result.contains_lactose());
    }

    #[test]
    fn test_nova_four_without_text() {
        let result = analyze_product(&record(None, None, Some(4)));
        assert!(result.is_ultra_processed());
        assert_eq!(result.ultra_processed.matched_terms, vec![NOVA_PLACEHOLDER]);
        assert_eq!(result.nova_score, Some(4));
    }

    #[test]
    fn test_nova_keeps_real_matches() {
        let result = analyze_product(&record(Some("sugar, maltodextrin"), None, Some(4)));
        assert_eq!(result.ultra_processed.matched_terms, vec!["Maltodextrin"]);
    }

    #[test]
    fn test_nova_below_threshold() {
        let result = analyze_product(&record(Some("apples"), None, Some(3)));
        assert!(!result.is_ultra_processed());
        assert_eq!(result.nova_score, Some(3));
    }

    #[test]
    fn test_text_matches_without_nova() {
        let result = analyze_product(&record(Some("corn, sucralose"), None, Some(1)));
        assert!(result.is_ultra_processed());
        assert_eq!(result.ultra_processed.matched_terms, vec!["Sucralose"]);
    }

    #[test]
    fn test_end_to_end() {
        let rec = record(Some("wheat flour, sugar, palm oil"), Some("gluten"), Some(4));
        let result = analyze_product(&rec);

        assert!(result.gluten.present);
        assert_eq!(result.gluten.matched_terms, vec!["Wheat", "Wheat Flour"]);
        assert!(!result.gluten.matched_terms.contains(&ALLERGEN_PLACEHOLDER.to_string()));

        assert!(!result.lactose.present);
        assert!(result.lactose.matched_terms.is_empty());

        assert!(result.ultra_processed.present);
        assert_eq!(result.ultra_processed.matched_terms, vec![NOVA_PLACEHOLDER]);
        assert_eq!(result.product, rec);
    }

    #[test]
    fn test_idempotent() {
        let rec = record(Some("milk chocolate, emulsifier: soy lecithin"), Some("milk"), Some(4));
        assert_eq!(analyze_product(&rec), analyze_product(&rec));
    }
}
