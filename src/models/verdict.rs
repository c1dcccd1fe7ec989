//! Classification verdicts
//!
//! Immutable results of checking a product against each dietary concern. Overrides
//! never mutate a verdict; they build a new one.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ProductRecord;
use crate::analysis::lexicon::Concern;

/// Placeholder term used when a concern comes from the allergen declaration
pub const ALLERGEN_PLACEHOLDER: &str = "Listed in allergens";

/// Placeholder term used when ultra-processing comes from the NOVA group
pub const NOVA_PLACEHOLDER: &str = "NOVA Group 4 (Ultra-processed)";

/// Verdict for a single concern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcernVerdict {
    pub present: bool,
    /// Title-cased evidence, sorted ascending with no duplicates
    pub matched_terms: Vec<String>,
}

impl ConcernVerdict {
    /// No evidence found
    pub fn absent() -> Self {
        Self::default()
    }

    /// Build from a set of matched terms; present iff the set is non-empty
    pub fn from_matches(matches: BTreeSet<String>) -> Self {
        Self {
            present: !matches.is_empty(),
            matched_terms: matches.into_iter().collect(),
        }
    }

    /// A positive verdict backed by a single synthetic term
    pub fn placeholder(term: &str) -> Self {
        Self {
            present: true,
            matched_terms: vec![term.to_string()],
        }
    }

    /// True when the verdict is backed by at least one term from the ingredient text
    pub fn has_matches(&self) -> bool {
        !self.matched_terms.is_empty()
    }

    /// Apply an external positive signal.
    ///
    /// The placeholder is used only when there is no real evidence; existing matches are
    /// returned untouched.
    pub fn with_signal(&self, signal: bool, placeholder: &str) -> Self {
        if signal && !self.has_matches() {
            Self::placeholder(placeholder)
        } else {
            Self {
                present: self.present || signal,
                matched_terms: self.matched_terms.clone(),
            }
        }
    }
}

/// One verdict per concern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcernVerdicts {
    pub gluten: ConcernVerdict,
    pub lactose: ConcernVerdict,
    pub ultra_processed: ConcernVerdict,
}

impl ConcernVerdicts {
    pub fn get(&self, concern: Concern) -> &ConcernVerdict {
        match concern {
            Concern::Gluten => &self.gluten,
            Concern::Lactose => &self.lactose,
            Concern::UltraProcessed => &self.ultra_processed,
        }
    }

    /// Return a copy with one concern's verdict replaced
    pub fn with(&self, concern: Concern, verdict: ConcernVerdict) -> Self {
        let mut next = self.clone();
        match concern {
            Concern::Gluten => next.gluten = verdict,
            Concern::Lactose => next.lactose = verdict,
            Concern::UltraProcessed => next.ultra_processed = verdict,
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (Concern, &ConcernVerdict)> {
        Concern::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Final analysis of one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub gluten: ConcernVerdict,
    pub lactose: ConcernVerdict,
    pub ultra_processed: ConcernVerdict,
    /// NOVA group as supplied, unvalidated
    pub nova_score: Option<i64>,
    pub product: ProductRecord,
}

impl AnalysisResult {
    pub fn new(verdicts: ConcernVerdicts, nova_score: Option<i64>, product: ProductRecord) -> Self {
        Self {
            gluten: verdicts.gluten,
            lactose: verdicts.lactose,
            ultra_processed: verdicts.ultra_processed,
            nova_score,
            product,
        }
    }

    pub fn contains_gluten(&self) -> bool {
        self.gluten.present
    }

    pub fn contains_lactose(&self) -> bool {
        self.lactose.present
    }

    pub fn is_ultra_processed(&self) -> bool {
        self.ultra_processed.present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_matches_sorted_and_present() {
        let v = ConcernVerdict::from_matches(terms(&["Whey", "Cream", "Butter"]));
        assert!(v.present);
        assert_eq!(v.matched_terms, vec!["Butter", "Cream", "Whey"]);

        let empty = ConcernVerdict::from_matches(BTreeSet::new());
        assert_eq!(empty, ConcernVerdict::absent());
    }

    #[test]
    fn test_signal_on_empty_uses_placeholder() {
        let v = ConcernVerdict::absent().with_signal(true, ALLERGEN_PLACEHOLDER);
        assert!(v.present);
        assert_eq!(v.matched_terms, vec![ALLERGEN_PLACEHOLDER]);
    }

    #[test]
    fn test_signal_keeps_real_matches() {
        let v = ConcernVerdict::from_matches(terms(&["Milk"]));
        let next = v.with_signal(true, ALLERGEN_PLACEHOLDER);
        assert_eq!(next, v);
    }

    #[test]
    fn test_no_signal_is_identity() {
        let v = ConcernVerdict::absent().with_signal(false, NOVA_PLACEHOLDER);
        assert_eq!(v, ConcernVerdict::absent());
    }

    #[test]
    fn test_verdicts_with_replaces_one() {
        let base = ConcernVerdicts::default();
        let next = base.with(Concern::Lactose, ConcernVerdict::placeholder(ALLERGEN_PLACEHOLDER));
        assert!(!base.lactose.present);
        assert!(next.lactose.present);
        assert!(!next.gluten.present);
        assert_eq!(next.iter().filter(|(_, v)| v.present).count(), 1);
    }
}
