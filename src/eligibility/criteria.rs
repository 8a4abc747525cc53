// SPDX-License-Identifier: MIT

//! Criteria: key paths mapped to conditions

use serde::Deserialize;
use serde_json::Value;

use super::condition::Condition;
use super::path::KeyPath;
use crate::error::EligibilityError;

/// A set of criteria. A cart is eligible when every entry matches.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Criteria {
    entries: Vec<(KeyPath, Condition)>,
}

impl Criteria {
    /// Create an empty criteria set (matches every cart)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from their JSON form.
    ///
    /// Only the top-level shape is checked; conditions that cannot be
    /// evaluated are kept and never match.
    pub fn from_value(value: &Value) -> Result<Self, EligibilityError> {
        let Value::Object(map) = value else {
            return Err(EligibilityError::invalid_criteria(format!(
                "expected a mapping of key paths to conditions, found {}",
                kind_of(value)
            )));
        };

        Ok(Self {
            entries: map
                .iter()
                .map(|(path, condition)| {
                    (KeyPath::parse(path), Condition::from_value(condition))
                })
                .collect(),
        })
    }

    /// Add or replace the condition for a key path
    pub fn insert(&mut self, key_path: &str, condition: &Value) {
        let condition = Condition::from_value(condition);
        match self
            .entries
            .iter_mut()
            .find(|(path, _)| path.as_str() == key_path)
        {
            Some((_, existing)) => *existing = condition,
            None => self.entries.push((KeyPath::parse(key_path), condition)),
        }
    }

    /// Builder-style [`Criteria::insert`]
    pub fn with(mut self, key_path: &str, condition: Value) -> Self {
        self.insert(key_path, &condition);
        self
    }

    pub fn get(&self, key_path: &str) -> Option<&Condition> {
        self.entries
            .iter()
            .find(|(path, _)| path.as_str() == key_path)
            .map(|(_, condition)| condition)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyPath, &Condition)> {
        self.entries.iter().map(|(path, condition)| (path, condition))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Value> for Criteria {
    type Error = EligibilityError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
