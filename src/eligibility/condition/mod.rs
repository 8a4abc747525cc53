// SPDX-License-Identifier: MIT

//! Condition evaluation for criteria entries
//!
//! A condition is either a scalar (loose equality) or a mapping of operators:
//! - `"gold"`
//! - `{"gt": 10, "lt": 20}`
//! - `{"or": {"in": ["vip"], "gte": 3}}`

mod ast;
mod coerce;
mod evaluator;

pub use ast::{Check, CompareOp, Condition};
pub use coerce::{coerce_to_number, loose_equals};
pub use evaluator::{evaluate, evaluate_check};
