//! Selection state for the symptom checklist.
//!
//! The checklist UI owns a mutable set of selected labels and toggles entries
//! as the user clicks. The minimum-selection gate lives here as caller-side
//! policy; the matcher itself accepts any selection, including an empty one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum number of selected symptoms before the checklist offers analysis.
pub const MIN_SELECTED_SYMPTOMS: usize = 4;

/// The set of symptom labels the user has currently selected.
///
/// Set semantics: selecting a label twice is a no-op, so duplicates are
/// immaterial by construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SymptomSelection {
    selected: HashSet<String>,
}

impl SymptomSelection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a label: select it if absent, deselect it if present.
    ///
    /// Returns whether the label is selected after the toggle.
    pub fn toggle(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.selected.remove(&label) {
            false
        } else {
            self.selected.insert(label);
            true
        }
    }

    /// Select a label.
    pub fn select(&mut self, label: impl Into<String>) {
        self.selected.insert(label.into());
    }

    /// Deselect a label.
    pub fn deselect(&mut self, label: &str) {
        self.selected.remove(label);
    }

    /// Check whether a label is currently selected.
    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    /// Number of selected labels.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// The selected labels as a set, in the form the matcher consumes.
    pub fn labels(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Check whether the selection meets the minimum-count policy.
    pub fn meets_minimum(&self) -> bool {
        self.selected.len() >= MIN_SELECTED_SYMPTOMS
    }

    /// How many more selections are needed to meet the minimum.
    pub fn missing_for_minimum(&self) -> usize {
        MIN_SELECTED_SYMPTOMS.saturating_sub(self.selected.len())
    }
}
