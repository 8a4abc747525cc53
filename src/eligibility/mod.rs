// SPDX-License-Identifier: MIT

pub mod condition;
pub mod criteria;
pub mod evaluator;
pub mod loader;
pub mod path;
pub mod rules;

pub use criteria::Criteria;
pub use evaluator::{is_eligible, EligibilityEvaluator};
pub use loader::{CriteriaLoader, DocumentFormat};
pub use path::{extract, Extracted, KeyPath};
pub use rules::{Rule, RuleBook};
