//! Data models
//!
//! Plain value types passed between the lookup collaborator, the analysis core and
//! the service layer.

mod nutrient;
mod product;
mod verdict;

pub use nutrient::{NutrientFact, NutritionBreakdown};
pub use product::{Nutriments, ProductEnvelope, ProductRecord};
pub use verdict::{
    AnalysisResult, ConcernVerdict, ConcernVerdicts, ALLERGEN_PLACEHOLDER, NOVA_PLACEHOLDER,
};
