//! # Triage Core
//!
//! The "brain" of the symptom checker. This crate interfaces with
//! `disease_base`, scores every condition record against the user's selected
//! symptoms, and assembles ranked results for presentation.
//!
//! ## Core Components
//!
//! - **matcher**: The pure scoring/ranking function over the knowledge base
//! - **selection**: The caller-owned selection state for the symptom checklist
//! - **report**: Structured result cards for the presentation layer
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Matching is a pure function; the same selection against
//!   the same knowledge base always yields the same ranking
//! - **Asymmetric scoring**: A condition is scored by the fraction of its own
//!   symptoms selected, which rewards precise small-symptom-set matches
//! - **Policy at the edge**: Minimum-selection gating belongs to the caller,
//!   never to the matcher

pub mod matcher;
pub mod report;
pub mod selection;

pub use matcher::*;
pub use report::*;
pub use selection::*;
