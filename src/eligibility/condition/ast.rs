// SPDX-License-Identifier: MIT

//! Typed representation of criteria conditions

use serde_json::{Map, Value};

/// A condition attached to a single key path
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Scalar condition: loose equality against the value
    Equals(Value),
    /// Operator mapping: every check must hold
    Checks(Vec<Check>),
    /// A sequence given where a condition was expected
    Unsupported,
}

/// One operator/argument pair of an operator mapping
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Numeric comparison against the operand
    Compare { op: CompareOp, operand: Value },
    /// Membership in a list of candidates
    In(Vec<Value>),
    /// `and`: every nested check must hold
    All(Vec<Check>),
    /// `or`: at least one nested check must hold
    Any(Vec<Check>),
    /// Operator name that is not recognized
    Unknown(String),
    /// Recognized operator with an argument of the wrong shape
    Malformed(String),
}

/// Numeric comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// gt
    Gt,
    /// gte
    Gte,
    /// lt
    Lt,
    /// lte
    Lte,
}

impl CompareOp {
    /// Compare two already-coerced numbers. NaN on either side fails.
    pub fn apply(self, left: f64, right: f64) -> bool {
        match self {
            CompareOp::Gt => left > right,
            CompareOp::Gte => left >= right,
            CompareOp::Lt => left < right,
            CompareOp::Lte => left <= right,
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::Gt => write!(f, "gt"),
            CompareOp::Gte => write!(f, "gte"),
            CompareOp::Lt => write!(f, "lt"),
            CompareOp::Lte => write!(f, "lte"),
        }
    }
}

impl Condition {
    /// Build a condition from its JSON form.
    ///
    /// Never fails: shapes that cannot be evaluated become variants that
    /// evaluate to false.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(operators) => Condition::Checks(parse_checks(operators)),
            Value::Array(_) => {
                log::warn!("Sequence used as a condition; it will never match");
                Condition::Unsupported
            }
            scalar => Condition::Equals(scalar.clone()),
        }
    }
}

impl Check {
    /// Build a single check from an operator name and its argument
    pub fn parse(operator: &str, argument: &Value) -> Self {
        let compare = |op| Check::Compare {
            op,
            operand: argument.clone(),
        };

        match operator {
            "gt" => compare(CompareOp::Gt),
            "gte" => compare(CompareOp::Gte),
            "lt" => compare(CompareOp::Lt),
            "lte" => compare(CompareOp::Lte),
            "in" => match argument {
                Value::Array(items) => Check::In(items.clone()),
                _ => malformed(operator, "a sequence"),
            },
            "and" => match argument {
                Value::Object(nested) => Check::All(parse_checks(nested)),
                _ => malformed(operator, "a mapping"),
            },
            "or" => match argument {
                Value::Object(nested) => Check::Any(parse_checks(nested)),
                _ => malformed(operator, "a mapping"),
            },
            other => {
                log::warn!("Unknown operator '{}'; it will never match", other);
                Check::Unknown(other.to_string())
            }
        }
    }
}

fn parse_checks(operators: &Map<String, Value>) -> Vec<Check> {
    operators
        .iter()
        .map(|(operator, argument)| Check::parse(operator, argument))
        .collect()
}

fn malformed(operator: &str, expected: &str) -> Check {
    log::warn!(
        "Operator '{}' expects {}; it will never match",
        operator,
        expected
    );
    Check::Malformed(operator.to_string())
}
