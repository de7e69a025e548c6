//! The symptom catalog - every selectable symptom label, grouped by
//! presentation category.
//!
//! Category membership is display metadata only: the matcher compares labels
//! by exact string equality and never consults the category a label belongs to.

use serde::{Deserialize, Serialize};

/// Presentation categories for the symptom checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    /// Observable physical symptoms (things others can see).
    Physical,
    /// Subjective feelings and sensations (what the patient feels).
    Subjective,
    /// Episodic or recurring symptoms (events that come and go).
    Episodic,
    /// Indicators common in hereditary conditions.
    Hereditary,
}

impl SymptomCategory {
    /// All categories in fixed display order.
    pub const ALL: [SymptomCategory; 4] = [
        SymptomCategory::Physical,
        SymptomCategory::Subjective,
        SymptomCategory::Episodic,
        SymptomCategory::Hereditary,
    ];

    /// Stable key for this category.
    pub fn key(&self) -> &'static str {
        match self {
            SymptomCategory::Physical => "physical",
            SymptomCategory::Subjective => "subjective",
            SymptomCategory::Episodic => "episodic",
            SymptomCategory::Hereditary => "hereditary",
        }
    }

    /// Human-readable title shown as the checklist section heading.
    pub fn title(&self) -> &'static str {
        match self {
            SymptomCategory::Physical => "Observable Physical Symptoms",
            SymptomCategory::Subjective => "Subjective Feelings & Sensations",
            SymptomCategory::Episodic => "Episodic or Recurring Symptoms",
            SymptomCategory::Hereditary => "Common in Hereditary Conditions",
        }
    }
}

impl std::fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The full catalog of selectable symptom labels, one ordered list per
/// category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SymptomCatalog {
    pub physical: Vec<String>,
    pub subjective: Vec<String>,
    pub episodic: Vec<String>,
    pub hereditary: Vec<String>,
}

impl SymptomCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the ordered labels for a category.
    pub fn labels(&self, category: SymptomCategory) -> &[String] {
        match category {
            SymptomCategory::Physical => &self.physical,
            SymptomCategory::Subjective => &self.subjective,
            SymptomCategory::Episodic => &self.episodic,
            SymptomCategory::Hereditary => &self.hereditary,
        }
    }

    /// Iterate over all categories with their labels, in display order.
    pub fn iter_categories(&self) -> impl Iterator<Item = (SymptomCategory, &[String])> {
        SymptomCategory::ALL
            .into_iter()
            .map(move |category| (category, self.labels(category)))
    }

    /// Check whether a label appears anywhere in the catalog.
    pub fn contains(&self, label: &str) -> bool {
        self.iter_categories()
            .any(|(_, labels)| labels.iter().any(|l| l == label))
    }

    /// Total number of labels across all categories.
    pub fn label_count(&self) -> usize {
        SymptomCategory::ALL
            .into_iter()
            .map(|category| self.labels(category).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> SymptomCatalog {
        SymptomCatalog {
            physical: vec!["Rash".to_string(), "Pale skin".to_string()],
            subjective: vec!["Nausea".to_string(), "Fatigue".to_string()],
            episodic: vec!["Seizures".to_string()],
            hereditary: vec!["Early graying".to_string()],
        }
    }

    #[test]
    fn test_category_titles() {
        assert_eq!(
            SymptomCategory::Physical.title(),
            "Observable Physical Symptoms"
        );
        assert_eq!(
            SymptomCategory::Hereditary.title(),
            "Common in Hereditary Conditions"
        );
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(SymptomCategory::Subjective.key(), "subjective");
        assert_eq!(SymptomCategory::Episodic.to_string(), "episodic");
    }

    #[test]
    fn test_labels_by_category() {
        let catalog = sample_catalog();

        assert_eq!(catalog.labels(SymptomCategory::Physical).len(), 2);
        assert_eq!(catalog.labels(SymptomCategory::Episodic), ["Seizures"]);
    }

    #[test]
    fn test_iter_categories_in_display_order() {
        let catalog = sample_catalog();

        let order: Vec<_> = catalog
            .iter_categories()
            .map(|(category, _)| category)
            .collect();

        assert_eq!(
            order,
            vec![
                SymptomCategory::Physical,
                SymptomCategory::Subjective,
                SymptomCategory::Episodic,
                SymptomCategory::Hereditary,
            ]
        );
    }

    #[test]
    fn test_contains_and_count() {
        let catalog = sample_catalog();

        assert!(catalog.contains("Fatigue"));
        assert!(!catalog.contains("fatigue"));
        assert!(!catalog.contains("Fever"));
        assert_eq!(catalog.label_count(), 6);
    }
}
