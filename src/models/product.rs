//! Product record model
//!
//! The decoded product record handed to the analysis core, matching the subset of the
//! Open Food Facts product schema the scanner uses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-100g nutrient readings keyed by the upstream nutriment vocabulary
/// (e.g. `"fat_100g"`, `"vitamin-c_100g"`).
///
/// Upstream payloads mix numbers, numeric strings and unit labels in the same object.
/// Deserialization keeps numbers and numeric strings, records `null` as an absent
/// reading, and drops everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct Nutriments(BTreeMap<String, Option<f64>>);

impl Nutriments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reading, treating `null`, missing keys and non-finite values alike
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied().flatten().filter(|v| v.is_finite())
    }

    /// Return a copy with one reading set
    pub fn with(mut self, key: impl Into<String>, value: Option<f64>) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.0.keys().filter(|k| self.get(k).is_some()).count()
    }
}

impl From<BTreeMap<String, Value>> for Nutriments {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => Some((key, None)),
                Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map(|v| (key, Some(v))),
                Value::String(s) => s
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| (key, Some(v))),
                _ => None,
            })
            .collect();
        Self(values)
    }
}

impl From<BTreeMap<String, Option<f64>>> for Nutriments {
    fn from(values: BTreeMap<String, Option<f64>>) -> Self {
        Self(values)
    }
}

impl<K: Into<String>> FromIterator<(K, Option<f64>)> for Nutriments {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A packaged-food product as supplied by the lookup collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub allergens: Option<String>,
    #[serde(default)]
    pub traces: Option<String>,
    /// NOVA processing group, expected 1-4
    #[serde(default)]
    pub nova_group: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub nutriments: Nutriments,
}

/// Envelope returned by the product lookup endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub status_verbose: Option<String>,
    #[serde(default)]
    pub product: Option<ProductRecord>,
}
