//! The matcher - scores and ranks condition records against selected symptoms.
//!
//! The algorithm works as follows:
//! 1. **Score**: For every condition, count how many of its symptoms were
//!    selected and divide by the condition's own symptom count
//! 2. **Filter**: Retain conditions scoring strictly above the threshold
//! 3. **Rank**: Sort retained conditions by descending score; equal scores
//!    keep knowledge-base declaration order

use std::collections::HashSet;

use disease_base::{Condition, KnowledgeBase};

/// Configuration for the matching algorithm.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Minimum score (exclusive) for a condition to appear in results.
    pub score_threshold: f32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.25,
        }
    }
}

/// The matcher ranks condition records against a set of selected symptoms.
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Create a new matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create a matcher with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(MatcherConfig::default())
    }

    /// Score a condition against the selected symptoms.
    ///
    /// The score is the fraction of the *condition's* symptom set that was
    /// selected, in [0, 1]. The measure is deliberately asymmetric: it is not
    /// the fraction of the user's selection that matched, so a condition with
    /// a small symptom set reaches a high score on few matches.
    pub fn score(&self, condition: &Condition, selected: &HashSet<String>) -> f32 {
        if condition.symptoms.is_empty() {
            return 0.0;
        }

        let matched = condition
            .symptoms
            .iter()
            .filter(|symptom| selected.contains(symptom.as_str()))
            .count();

        matched as f32 / condition.symptom_count() as f32
    }

    /// Rank every condition in the knowledge base against the selection.
    ///
    /// Returns the conditions scoring strictly above the threshold, ordered
    /// by descending score. Ties keep declaration order (stable sort), so
    /// results are reproducible. An empty selection yields an empty result.
    pub fn rank<'a>(
        &self,
        base: &'a KnowledgeBase,
        selected: &HashSet<String>,
    ) -> Vec<&'a Condition> {
        self.rank_scored(base, selected)
            .into_iter()
            .map(|(condition, _)| condition)
            .collect()
    }

    /// Rank as [`rank`](Self::rank), keeping each condition's score.
    pub fn rank_scored<'a>(
        &self,
        base: &'a KnowledgeBase,
        selected: &HashSet<String>,
    ) -> Vec<(&'a Condition, f32)> {
        let mut matches: Vec<_> = base
            .conditions()
            .iter()
            .map(|condition| (condition, self.score(condition, selected)))
            .filter(|(_, score)| *score > self.config.score_threshold)
            .collect();

        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        matches
    }
}
