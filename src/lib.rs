// SPDX-License-Identifier: MIT

//! Cart eligibility evaluation
//!
//! Decides whether a structured record (a cart) satisfies a declarative set
//! of criteria. Criteria map dotted key paths to conditions:
//! - `"total": {"gte": 50}`
//! - `"products.productId": {"in": [1, 2, 3]}`
//! - `"customer.tier": "gold"`

pub mod eligibility;
pub mod error;

pub use eligibility::{is_eligible, Criteria, EligibilityEvaluator};
pub use error::EligibilityError;
