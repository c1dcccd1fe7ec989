//! Analysis MCP Tools
//!
//! Builds the responses returned by the product analysis tools.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::{analyze_product, classify_text, nova_description};
use crate::lookup::{LookupError, ProductClient};
use crate::models::{
    AnalysisResult, ConcernVerdicts, NutrientFact, Nutriments, NutritionBreakdown, ProductRecord,
};
use crate::nutrition::{normalize, summarize};

/// Full report for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductReport {
    pub analysis: AnalysisResult,
    pub nova_description: &'static str,
    pub summary: Vec<NutrientFact>,
    pub nutrition: NutritionBreakdown,
}

impl ProductReport {
    /// Analyze a record and normalize its nutrients
    pub fn build(record: &ProductRecord) -> Self {
        let analysis = analyze_product(record);
        Self {
            nova_description: nova_description(analysis.nova_score),
            summary: summarize(&record.nutriments),
            nutrition: normalize(&record.nutriments),
            analysis,
        }
    }
}

/// Response for classify_ingredients
#[derive(Debug, Serialize)]
pub struct ClassifyIngredientsResponse {
    pub verdicts: ConcernVerdicts,
    pub concerns_found: Vec<&'static str>,
}

/// Response for describe_nova_group
#[derive(Debug, Serialize)]
pub struct NovaGroupResponse {
    pub nova_group: Option<i64>,
    pub description: &'static str,
    pub ultra_processed: bool,
}

/// Look up a product by barcode and build its report
pub async fn lookup_product(client: &ProductClient, barcode: &str) -> Result<ProductReport, String> {
    let record = client.fetch_product(barcode).await.map_err(|e| match e {
        LookupError::NotFound(_) => "Product not found in database".to_string(),
        other => other.to_string(),
    })?;
    Ok(ProductReport::build(&record))
}

/// Build a report for a caller-supplied record
pub fn analyze_record(record: ProductRecord) -> Result<ProductReport, String> {
    if let Some(nova) = record.nova_group {
        if nova < 0 {
            return Err("nova_group cannot be negative".to_string());
        }
    }
    Ok(ProductReport::build(&record))
}

/// Classify ingredient text only
pub fn classify_ingredients(text: &str) -> ClassifyIngredientsResponse {
    let verdicts = classify_text(Some(text));
    let concerns_found = verdicts
        .iter()
        .filter(|(_, v)| v.present)
        .map(|(c, _)| c.as_str())
        .collect();
    ClassifyIngredientsResponse {
        verdicts,
        concerns_found,
    }
}

/// Normalize a raw nutriment map
pub fn normalize_nutrients(nutriments: BTreeMap<String, Option<f64>>) -> NutritionBreakdown {
    normalize(&Nutriments::from(nutriments))
}

/// Describe a NOVA group
pub fn describe_nova_group(nova_group: Option<i64>) -> NovaGroupResponse {
    NovaGroupResponse {
        nova_group,
        description: nova_description(nova_group),
        ultra_processed: nova_group.unwrap_or(0) >= crate::analysis::orchestrator::ULTRA_PROCESSED_NOVA_GROUP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOVA_PLACEHOLDER;

    fn sample_record() -> ProductRecord {
        ProductRecord {
            product_name: Some("Sample Product".to_string()),
            ingredients_text: Some("Wheat flour, sugar, palm oil".to_string()),
            allergens: Some("en:gluten".to_string()),
            nova_group: Some(4),
            nutriments: Nutriments::new()
                .with("energy-kcal_100g", Some(250.0))
                .with("fat_100g", Some(15.0))
                .with("sodium_100g", Some(0.5))
                .with("vitamin-c_100g", Some(0.06))
                .with("iron_100g", Some(0.003)),
            ..Default::default()
        }
    }

    #[test]
    fn test_report_combines_analysis_and_nutrition() {
        let report = ProductReport::build(&sample_record());
        assert!(report.analysis.contains_gluten());
        assert_eq!(report.analysis.ultra_processed.matched_terms, vec![NOVA_PLACEHOLDER]);
        assert_eq!(report.nova_description, "Ultra-processed foods");
        assert_eq!(report.nutrition.macronutrients.len(), 3);
        assert_eq!(report.nutrition.find("Vitamin C").unwrap().formatted, "60");
        assert_eq!(report.summary.len(), 2);
    }

    #[test]
    fn test_report_serializes() {
        let report = ProductReport::build(&sample_record());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["analysis"]["gluten"]["present"], true);
        assert_eq!(json["analysis"]["nova_score"], 4);
        assert_eq!(json["nutrition"]["minerals"][0]["unit"], "mg");
        assert_eq!(json["analysis"]["product"]["nutriments"]["fat_100g"], 15.0);
    }

    #[test]
    fn test_analyze_record_rejects_negative_nova() {
        let record = ProductRecord {
            nova_group: Some(-1),
            ..Default::default()
        };
        assert!(analyze_record(record).is_err());
    }

    #[test]
    fn test_classify_ingredients_lists_concerns() {
        let response = classify_ingredients("skim milk, aspartame");
        assert_eq!(response.concerns_found, vec!["lactose", "ultra-processed"]);
        assert!(!response.verdicts.gluten.present);
    }

    #[test]
    fn test_normalize_nutrients_map() {
        let mut raw = BTreeMap::new();
        raw.insert("potassium_100g".to_string(), Some(0.35));
        raw.insert("zinc_100g".to_string(), None);
        let breakdown = normalize_nutrients(raw);
        assert_eq!(breakdown.minerals.len(), 1);
        assert_eq!(breakdown.minerals[0].formatted, "350");
    }

    #[test]
    fn test_describe_nova_group() {
        let response = describe_nova_group(Some(2));
        assert_eq!(response.description, "Processed culinary ingredients");
        assert!(!response.ultra_processed);
        assert!(describe_nova_group(Some(4)).ultra_processed);
    }

    #[tokio::test]
    async fn test_lookup_rejects_bad_barcode_without_network() {
        let client = ProductClient::new(&crate::config::Config::default()).unwrap();
        let err = lookup_product(&client, "not-a-code").await.unwrap_err();
        assert!(err.starts_with("Invalid barcode"));
    }
}
