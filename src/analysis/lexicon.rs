//! Marker phrase lexicon
//!
//! Static reference lists of lowercase phrases whose presence in an ingredient list
//! signals a dietary concern. Order is authoring order only; the classifier sorts its
//! output, so nothing downstream depends on it.

use serde::{Deserialize, Serialize};

/// A dietary concern the classifier reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Concern {
    Gluten,
    Lactose,
    UltraProcessed,
}

impl Concern {
    /// All concerns in reporting order
    pub const ALL: [Concern; 3] = [Concern::Gluten, Concern::Lactose, Concern::UltraProcessed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::Gluten => "gluten",
            Concern::Lactose => "lactose",
            Concern::UltraProcessed => "ultra-processed",
        }
    }

    /// The marker phrases for this concern
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            Concern::Gluten => GLUTEN_PHRASES,
            Concern::Lactose => LACTOSE_PHRASES,
            Concern::UltraProcessed => ULTRA_PROCESSED_PHRASES,
        }
    }
}

// ============================================================================
// Gluten
// ============================================================================

pub const GLUTEN_PHRASES: &[&str] = &[
    "wheat", "barley", "rye", "oats", "spelt", "kamut", "triticale",
    "wheat flour", "wheat starch", "wheat protein", "wheat gluten",
    "barley malt", "barley extract", "malt extract", "malt flavoring",
    "rye flour", "graham flour", "durum wheat", "semolina",
    "bulgur", "couscous", "farro", "freekeh",
    "brewer's yeast", "wheat bran", "wheat germ",
    "modified wheat starch", "hydrolyzed wheat protein",
    "vital wheat gluten", "seitan", "fu",
    "atta flour", "maida flour", "sooji",
    "einkorn", "emmer", "dinkel",
];

// ============================================================================
// Lactose
// ============================================================================

pub const LACTOSE_PHRASES: &[&str] = &[
    "milk", "lactose", "whey", "casein", "caseinate",
    "milk powder", "dried milk", "skim milk", "whole milk",
    "buttermilk", "cream", "butter", "ghee",
    "yogurt", "kefir", "cheese", "cottage cheese",
    "whey protein", "milk protein", "milk solids",
    "sodium caseinate", "calcium caseinate", "potassium caseinate",
    "lactalbumin", "lactoglobulin", "milk fat",
    "anhydrous milk fat", "curds", "custard",
    "half and half", "condensed milk", "evaporated milk",
    "milk chocolate", "malted milk", "acidophilus milk",
    "butterfat", "butter oil", "butter solids",
    "dairy", "galactose",
];

// ============================================================================
// Ultra-processed indicators
// ============================================================================

pub const ULTRA_PROCESSED_PHRASES: &[&str] = &[
    "high fructose corn syrup", "corn syrup", "glucose syrup",
    "hydrogenated", "partially hydrogenated", "trans fat",
    "monosodium glutamate", "msg", "aspartame", "sucralose",
    "acesulfame potassium", "sodium benzoate", "potassium sorbate",
    "bht", "bha", "tbhq", "artificial flavor", "artificial flavoring",
    "natural flavor", "modified corn starch", "modified food starch",
    "sodium nitrite", "sodium nitrate", "carrageenan",
    "xanthan gum", "guar gum", "locust bean gum",
    "polydextrose", "maltodextrin", "dextrose",
    "phosphoric acid", "citric acid", "malic acid",
    "calcium propionate", "sodium propionate",
    "artificial color", "fd&c", "yellow 5", "yellow 6",
    "red 40", "blue 1", "blue 2", "caramel color",
    "silicon dioxide", "titanium dioxide",
    "propylene glycol", "polyethylene glycol",
    "soy lecithin", "sunflower lecithin",
    "mono and diglycerides", "polysorbate",
];
