//! Ingredient analysis module
//!
//! Classifies products for gluten, lactose and ultra-processing.

pub mod classifier;
pub mod lexicon;
pub mod nova;
pub mod orchestrator;

pub use classifier::{classify_text, title_case};
pub use lexicon::Concern;
pub use nova::nova_description;
pub use orchestrator::analyze_product;
