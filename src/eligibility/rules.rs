// SPDX-License-Identifier: MIT

//! Named rule books
//!
//! A rule book groups several criteria sets under names, so one cart can be
//! checked against every promotion at once.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;

use super::criteria::Criteria;
use super::evaluator::EligibilityEvaluator;
use crate::error::EligibilityError;

/// A named criteria set
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub criteria: Criteria,
}

/// Ordered collection of uniquely named rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

#[derive(Deserialize)]
struct RuleBookDocument {
    #[serde(default)]
    rules: Vec<Rule>,
}

impl RuleBook {
    /// Create a rule book, rejecting duplicate names
    pub fn new(rules: Vec<Rule>) -> Result<Self, EligibilityError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(EligibilityError::DuplicateRule(rule.name.clone()));
            }
        }
        Ok(Self { rules })
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules the cart satisfies, in rule book order
    pub fn eligible_rules(&self, cart: &Value) -> Vec<&Rule> {
        let evaluator = EligibilityEvaluator::new();
        self.rules
            .iter()
            .filter(|rule| {
                let eligible = evaluator.is_eligible(cart, &rule.criteria);
                log::debug!("Rule '{}': eligible = {}", rule.name, eligible);
                eligible
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for RuleBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = RuleBookDocument::deserialize(deserializer)?;
        Self::new(document.rules).map_err(serde::de::Error::custom)
    }
}
