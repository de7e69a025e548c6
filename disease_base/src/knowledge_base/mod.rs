//! The knowledge base - the process-wide immutable aggregate of condition
//! records and the symptom catalog.
//!
//! The base is constructed once from static TOML data and never mutated, so
//! it is safely shared across threads without locking. Malformed static data
//! is a construction-time invariant violation, not a per-request error.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

use crate::conditions::Condition;
use crate::symptoms::SymptomCatalog;

/// The built-in knowledge data shipped with the crate.
const BUILTIN_DATA: &str = include_str!("../../data/knowledge.toml");

/// Errors raised while constructing a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    /// The TOML data could not be parsed.
    #[error("failed to parse knowledge data: {0}")]
    Parse(#[from] toml::de::Error),

    /// A condition was declared with no symptoms. Left in place it would
    /// divide by zero in the match score.
    #[error("condition '{name}' has an empty symptom set")]
    EmptySymptomSet { name: String },

    /// Two conditions share the same name.
    #[error("duplicate condition name '{name}'")]
    DuplicateName { name: String },

    /// A condition lists the same symptom label twice.
    #[error("condition '{name}' lists symptom '{symptom}' more than once")]
    DuplicateSymptom { name: String, symptom: String },
}

/// Raw wire form of the knowledge data, before invariant checks.
#[derive(Debug, Deserialize)]
struct KnowledgeData {
    catalog: SymptomCatalog,
    conditions: Vec<Condition>,
}

/// The immutable set of condition records plus the symptom catalog.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBase {
    conditions: Vec<Condition>,
    catalog: SymptomCatalog,
}

impl KnowledgeBase {
    /// Build a knowledge base from parts, enforcing the base invariants:
    /// unique condition names, non-empty duplicate-free symptom sets.
    pub fn new(
        conditions: Vec<Condition>,
        catalog: SymptomCatalog,
    ) -> Result<Self, KnowledgeBaseError> {
        let base = Self {
            conditions,
            catalog,
        };
        base.validate()?;
        Ok(base)
    }

    /// Parse and validate a knowledge base from TOML data.
    pub fn from_toml_str(data: &str) -> Result<Self, KnowledgeBaseError> {
        let data: KnowledgeData = toml::from_str(data)?;
        Self::new(data.conditions, data.catalog)
    }

    /// Build the knowledge base shipped with the crate.
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::from_toml_str(BUILTIN_DATA)
    }

    /// The process-wide knowledge base singleton.
    ///
    /// Initialized on first access and read-only afterwards. Aborts the
    /// process if the embedded data violates a base invariant - a defect in
    /// the shipped data, caught at startup rather than per request.
    pub fn global() -> &'static KnowledgeBase {
        static GLOBAL: OnceLock<KnowledgeBase> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            KnowledgeBase::builtin().expect("built-in knowledge data is malformed")
        })
    }

    /// All condition records, in declaration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The symptom catalog, grouped by presentation category.
    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    /// Look up a condition by its unique name.
    pub fn get_condition(&self, name: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.name == name)
    }

    /// Total number of condition records.
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    fn validate(&self) -> Result<(), KnowledgeBaseError> {
        let mut seen_names = HashSet::new();

        for condition in &self.conditions {
            if !seen_names.insert(condition.name.as_str()) {
                return Err(KnowledgeBaseError::DuplicateName {
                    name: condition.name.clone(),
                });
            }

            if condition.symptoms.is_empty() {
                return Err(KnowledgeBaseError::EmptySymptomSet {
                    name: condition.name.clone(),
                });
            }

            let mut seen_symptoms = HashSet::new();
            for symptom in &condition.symptoms {
                if !seen_symptoms.insert(symptom.as_str()) {
                    return Err(KnowledgeBaseError::DuplicateSymptom {
                        name: condition.name.clone(),
                        symptom: symptom.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
