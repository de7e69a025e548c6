//! Condition definitions - the immutable disease records of the knowledge base.

use serde::{Deserialize, Serialize};

/// Severity classification for a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Human-readable label, as shown on result cards.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named disease/disorder record with its defining symptom set.
///
/// Records are immutable once the knowledge base is constructed. The `name`
/// is the unique identifier across the whole base; `symptoms` preserves
/// declaration order but behaves as a set (no duplicates, exact string
/// equality).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Unique human-readable identifier.
    pub name: String,

    /// Symptom labels associated with this condition. Never empty.
    pub symptoms: Vec<String>,

    /// Severity classification.
    pub severity: Severity,

    /// Free-text description shown to the user.
    pub description: String,

    /// Whether the condition is hereditary. Absent in data means false.
    #[serde(default)]
    pub hereditary: bool,
}

impl Condition {
    /// Create a new condition with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symptoms: Vec::new(),
            severity: Severity::Mild,
            description: String::new(),
            hereditary: false,
        }
    }

    /// Add a symptom label to this condition.
    pub fn with_symptom(mut self, symptom: impl Into<String>) -> Self {
        self.symptoms.push(symptom.into());
        self
    }

    /// Add multiple symptom labels to this condition.
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms.extend(symptoms.into_iter().map(Into::into));
        self
    }

    /// Set the severity classification.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the condition as hereditary.
    pub fn with_hereditary(mut self, hereditary: bool) -> Self {
        self.hereditary = hereditary;
        self
    }

    /// Check whether this condition lists a specific symptom label.
    ///
    /// Matching is by exact string equality.
    pub fn has_symptom(&self, label: &str) -> bool {
        self.symptoms.iter().any(|s| s == label)
    }

    /// Number of symptoms defining this condition.
    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }
}
