//! Condition evaluator

use super::ast::{Check, Condition};
use super::coerce::{coerce_to_number, loose_equals};
use serde_json::Value;

/// Evaluate a condition against a single value
pub fn evaluate(value: &Value, condition: &Condition) -> bool {
    match condition {
        Condition::Equals(expected) => loose_equals(value, expected),
        Condition::Checks(checks) => checks.iter().all(|check| evaluate_check(value, check)),
        Condition::Unsupported => false,
    }
}

/// Evaluate one operator check against a single value
pub fn evaluate_check(value: &Value, check: &Check) -> bool {
    match check {
        Check::Compare { op, operand } => {
            op.apply(coerce_to_number(value), coerce_to_number(operand))
        }
        Check::In(candidates) => candidates
            .iter()
            .any(|candidate| loose_equals(value, candidate)),
        Check::All(checks) => checks.iter().all(|check| evaluate_check(value, check)),
        Check::Any(checks) => checks.iter().any(|check| evaluate_check(value, check)),
        Check::Unknown(_) | Check::Malformed(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn holds(value: Value, condition: Value) -> bool {
        evaluate(&value, &Condition::from_value(&condition))
    }

    #[test]
    fn test_scalar_equality() {
        assert!(holds(json!("gold"), json!("gold")));
        assert!(!holds(json!("gold"), json!("silver")));
        assert!(holds(json!(5), json!("5")));
        assert!(holds(json!(null), json!(null)));
        assert!(holds(json!(["sale"]), json!("sale")));
    }

    #[test]
    fn test_number_comparison() {
        assert!(holds(json!(7.5), json!({"gt": 5})));
        assert!(!holds(json!(7.5), json!({"gt": 10})));

        assert!(holds(json!(7.5), json!({"gte": 7.5})));
        assert!(!holds(json!(7.5), json!({"gte": 8})));

        assert!(holds(json!(7.5), json!({"lt": 10})));
        assert!(!holds(json!(7.5), json!({"lt": 5})));

        assert!(holds(json!(7.5), json!({"lte": 7.5})));
        assert!(!holds(json!(7.5), json!({"lte": 7})));
    }

    #[test]
    fn test_comparison_coerces_strings() {
        assert!(holds(json!("15"), json!({"gt": 10})));
        assert!(holds(json!(15), json!({"lt": "20"})));
        assert!(!holds(json!("abc"), json!({"gt": 0})));
        assert!(!holds(json!("abc"), json!({"lte": 0})));
    }

    #[test]
    fn test_range() {
        let range = json!({"gt": 10, "lt": 20});
        assert!(holds(json!(15), range.clone()));
        assert!(!holds(json!(25), range.clone()));
        assert!(!holds(json!(10), range));
    }

    #[test]
    fn test_in() {
        assert!(holds(json!("b"), json!({"in": ["a", "b", "c"]})));
        assert!(!holds(json!("d"), json!({"in": ["a", "b", "c"]})));
        assert!(holds(json!("2"), json!({"in": [1, 2, 3]})));
        assert!(holds(json!([2]), json!({"in": [1, 2, 3]})));
        assert!(!holds(json!([1, 2]), json!({"in": [1, 2, 3]})));
        assert!(!holds(json!("b"), json!({"in": "abc"})));
        assert!(!holds(json!("b"), json!({"in": []})));
    }

    #[test]
    fn test_and() {
        assert!(holds(json!(50), json!({"and": {"gte": 10, "lte": 100}})));
        assert!(!holds(json!(150), json!({"and": {"gte": 10, "lte": 100}})));
        assert!(holds(json!(50), json!({"and": {}})));
    }

    #[test]
    fn test_or() {
        let outside = json!({"or": {"gt": 100, "lt": 0}});
        assert!(!holds(json!(50), outside.clone()));
        assert!(holds(json!(150), outside.clone()));
        assert!(holds(json!(-1), outside));
        assert!(!holds(json!(50), json!({"or": {}})));
    }

    #[test]
    fn test_nested_logic() {
        let condition = json!({"or": {"in": ["vip"], "and": {"gte": 3, "lt": 5}}});
        assert!(holds(json!("vip"), condition.clone()));
        assert!(holds(json!(4), condition.clone()));
        assert!(!holds(json!(5), condition));
    }

    #[test]
    fn test_unknown_operator_fails_closed() {
        assert!(!holds(json!(5), json!({"eq": 5})));
        assert!(!holds(json!(5), json!({"gt": 1, "between": [1, 10]})));
        assert!(!holds(json!(5), json!({"or": {"nope": 5}})));
    }

    #[test]
    fn test_malformed_logic_fails_closed() {
        assert!(!holds(json!(5), json!({"and": 5})));
        assert!(!holds(json!(5), json!({"or": "gt"})));
    }

    #[test]
    fn test_sequence_condition_fails_closed() {
        assert!(!holds(json!(5), json!([5])));
        assert!(!holds(json!(5), json!([])));
    }

    #[test]
    fn test_empty_operator_mapping_holds() {
        assert!(holds(json!("anything"), json!({})));
    }
}
