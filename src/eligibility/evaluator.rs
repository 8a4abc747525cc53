// SPDX-License-Identifier: MIT

//! Eligibility evaluation of a cart against criteria

use serde_json::Value;

use super::condition::{evaluate, Condition};
use super::criteria::Criteria;
use super::path::{Extracted, KeyPath};

/// Evaluates carts against criteria.
///
/// Stateless; one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEvaluator;

impl EligibilityEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// True when every criterion matches the cart.
    ///
    /// A criterion whose path is absent fails. When the path resolves to a
    /// sequence, one matching element is enough.
    pub fn is_eligible(&self, cart: &Value, criteria: &Criteria) -> bool {
        criteria
            .iter()
            .all(|(path, condition)| self.criterion_holds(cart, path, condition))
    }

    /// Same as [`EligibilityEvaluator::is_eligible`], for criteria still in JSON form.
    /// Criteria that are not a mapping never match.
    pub fn is_eligible_json(&self, cart: &Value, criteria: &Value) -> bool {
        match Criteria::from_value(criteria) {
            Ok(criteria) => self.is_eligible(cart, &criteria),
            Err(e) => {
                log::warn!("Rejecting cart: {}", e);
                false
            }
        }
    }

    fn criterion_holds(&self, cart: &Value, path: &KeyPath, condition: &Condition) -> bool {
        let extracted = path.extract(cart);
        if let Extracted::Absent = extracted {
            log::debug!("Criterion '{}' failed: path not present in cart", path);
            return false;
        }

        let held = extracted
            .candidates()
            .into_iter()
            .any(|value| evaluate(value, condition));
        if !held {
            log::debug!("Criterion '{}' failed: no value satisfies {:?}", path, condition);
        }
        held
    }
}

/// Check a cart against criteria given as JSON
pub fn is_eligible(cart: &Value, criteria: &Value) -> bool {
    EligibilityEvaluator::new().is_eligible_json(cart, criteria)
}
