//! # Disease Base
//!
//! The "Data Bible" crate - contains the condition records, severity levels,
//! and the categorized symptom catalog for the symptom checker. This crate is
//! the single source of truth for static knowledge and does not contain any
//! matching logic.

pub mod conditions;
pub mod knowledge_base;
pub mod symptoms;

pub use conditions::*;
pub use knowledge_base::*;
pub use symptoms::*;
