//! Ingredient text classifier
//!
//! Matches ingredient text against the marker phrase lexicon.

use std::collections::BTreeSet;

use super::lexicon::Concern;
use crate::models::{ConcernVerdict, ConcernVerdicts};

/// Classify free-form ingredient text against every concern.
///
/// Matching is plain case-insensitive substring containment, so "oats" also matches
/// inside "goats". Absent or empty text yields no matches.
pub fn classify_text(text: Option<&str>) -> ConcernVerdicts {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t.to_lowercase(),
        _ => return ConcernVerdicts::default(),
    };

    ConcernVerdicts {
        gluten: classify_concern(&text, Concern::Gluten),
        lactose: classify_concern(&text, Concern::Lactose),
        ultra_processed: classify_concern(&text, Concern::UltraProcessed),
    }
}

/// Collect the phrases of one concern found in already-lowercased text
fn classify_concern(lowered: &str, concern: Concern) -> ConcernVerdict {
    let matches: BTreeSet<String> = find_phrases(lowered, concern.phrases())
        .map(title_case)
        .collect();
    ConcernVerdict::from_matches(matches)
}

fn find_phrases<'a>(
    lowered: &'a str,
    phrases: &'static [&'static str],
) -> impl Iterator<Item = &'static str> + 'a {
    phrases.iter().copied().filter(move |p| lowered.contains(p))
}

/// Capitalize the first letter of every whitespace-separated word
pub fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_text() {
        let v = classify_text(None);
        assert_eq!(v, ConcernVerdicts::default());
        for (_, verdict) in v.iter() {
            assert!(!verdict.present);
            assert!(verdict.matched_terms.is_empty());
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(classify_text(Some("")), ConcernVerdicts::default());
        assert_eq!(classify_text(Some("   ")), ConcernVerdicts::default());
    }

    #[test]
    fn test_case_insensitive_containment() {
        let v = classify_text(Some("Organic OATS, Sea Salt"));
        assert!(v.gluten.present);
        assert_eq!(v.gluten.matched_terms, vec!["Oats"]);
    }

    #[test]
    fn test_substring_not_word_boundary() {
        // "goats" contains "oats"
        let v = classify_text(Some("Goats milk"));
        assert_eq!(v.gluten.matched_terms, vec!["Oats"]);
        assert_eq!(v.lactose.matched_terms, vec!["Milk"]);
    }

    #[test]
    fn test_terms_sorted_and_unique() {
        let v = classify_text(Some("whey protein, skim milk, cream, whey, milk"));
        assert_eq!(
            v.lactose.matched_terms,
            vec!["Cream", "Milk", "Skim Milk", "Whey", "Whey Protein"]
        );
        let mut sorted = v.lactose.matched_terms.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, v.lactose.matched_terms);
    }

    #[test]
    fn test_overlapping_phrases_all_reported() {
        let v = classify_text(Some("wheat flour, sugar, palm oil"));
        assert_eq!(v.gluten.matched_terms, vec!["Wheat", "Wheat Flour"]);
        assert!(!v.lactose.present);
        assert!(!v.ultra_processed.present);
    }

    #[test]
    fn test_ultra_processed_indicators() {
        let v = classify_text(Some("Water, High Fructose Corn Syrup, Caramel Color, Phosphoric Acid"));
        assert_eq!(
            v.ultra_processed.matched_terms,
            vec!["Caramel Color", "Corn Syrup", "High Fructose Corn Syrup", "Phosphoric Acid"]
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("wheat flour"), "Wheat Flour");
        assert_eq!(title_case("brewer's yeast"), "Brewer's Yeast");
        assert_eq!(title_case("fd&c"), "Fd&c");
        assert_eq!(title_case("mono and diglycerides"), "Mono And Diglycerides");
    }
}
