//! Result assembly - the structured report the presentation layer renders.
//!
//! Each ranked condition becomes a card carrying exactly what the result view
//! shows: name, severity badge, optional hereditary badge, and description.
//! Scores influence ordering only and are not part of the report.

use serde::{Deserialize, Serialize};

use disease_base::{Condition, KnowledgeBase, Severity};

use crate::matcher::Matcher;
use crate::selection::SymptomSelection;

/// One ranked condition, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCard {
    pub name: String,
    pub severity: Severity,
    pub hereditary: bool,
    pub description: String,
}

impl MatchCard {
    fn from_condition(condition: &Condition) -> Self {
        Self {
            name: condition.name.clone(),
            severity: condition.severity,
            hereditary: condition.hereditary,
            description: condition.description.clone(),
        }
    }
}

/// The assembled analysis result for one selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// How many symptoms the analysis was based on.
    pub selected_count: usize,

    /// Ranked result cards, best match first.
    pub cards: Vec<MatchCard>,
}

impl MatchReport {
    /// Run the matcher over the knowledge base and assemble the report.
    pub fn build(matcher: &Matcher, base: &KnowledgeBase, selection: &SymptomSelection) -> Self {
        let cards = matcher
            .rank(base, selection.labels())
            .into_iter()
            .map(MatchCard::from_condition)
            .collect();

        Self {
            selected_count: selection.len(),
            cards,
        }
    }

    /// Check whether no condition matched.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of matched conditions.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Format the report as plain text.
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();

        out.push_str("## Possible Conditions\n");
        out.push_str(&format!(
            "Preliminary analysis based on {} symptoms. Please consult a healthcare professional for proper diagnosis.\n\n",
            self.selected_count
        ));

        if self.cards.is_empty() {
            out.push_str("No matching conditions found for the selected symptoms.\n");
            return out;
        }

        for card in &self.cards {
            let hereditary = if card.hereditary { " [hereditary]" } else { "" };
            out.push_str(&format!(
                "- {} [{}]{}: {}\n",
                card.name, card.severity, hereditary, card.description
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covid_selection() -> SymptomSelection {
        let mut selection = SymptomSelection::new();
        selection.select("Loss of taste");
        selection.select("Loss of smell");
        selection.select("Fatigue");
        selection.select("Coughing fits");
        selection
    }

    #[test]
    fn test_build_report() {
        let base = KnowledgeBase::builtin().unwrap();
        let matcher = Matcher::with_defaults();
        let selection = covid_selection();

        let report = MatchReport::build(&matcher, &base, &selection);

        assert_eq!(report.selected_count, 4);
        assert!(!report.is_empty());
        assert!(report.cards.iter().any(|card| card.name == "COVID-19"));
    }

    #[test]
    fn test_card_carries_badges() {
        let base = KnowledgeBase::builtin().unwrap();
        let matcher = Matcher::with_defaults();

        let mut selection = SymptomSelection::new();
        for label in ["Blood clotting issues", "Bruising easily", "Bleeding gums"] {
            selection.select(label);
        }

        let report = MatchReport::build(&matcher, &base, &selection);
        let card = report
            .cards
            .iter()
            .find(|card| card.name == "Hemophilia")
            .unwrap();

        assert_eq!(card.severity, Severity::Severe);
        assert!(card.hereditary);
        assert_eq!(card.description, "A disorder that impairs blood clotting.");
    }

    #[test]
    fn test_empty_report_display() {
        let base = KnowledgeBase::builtin().unwrap();
        let matcher = Matcher::with_defaults();
        let selection = SymptomSelection::new();

        let report = MatchReport::build(&matcher, &base, &selection);

        assert!(report.is_empty());
        assert!(report
            .to_display_string()
            .contains("No matching conditions found"));
    }

    #[test]
    fn test_display_string_lists_matches() {
        let base = KnowledgeBase::builtin().unwrap();
        let matcher = Matcher::with_defaults();
        let selection = covid_selection();

        let report = MatchReport::build(&matcher, &base, &selection);
        let text = report.to_display_string();

        assert!(text.contains("based on 4 symptoms"));
        assert!(text.contains("COVID-19 [severe]"));
    }

    #[test]
    fn test_report_serializes() {
        let base = KnowledgeBase::builtin().unwrap();
        let matcher = Matcher::with_defaults();
        let selection = covid_selection();

        let report = MatchReport::build(&matcher, &base, &selection);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["selected_count"], 4);
        assert!(json["cards"].as_array().unwrap().len() >= 1);
    }
}
