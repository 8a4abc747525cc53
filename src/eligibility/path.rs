// SPDX-License-Identifier: MIT

//! Key path extraction with implicit array fan-out

use serde_json::Value;

/// A dot-separated route through a cart (e.g., "products.productId")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

/// Result of following a key path through a cart
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<'v> {
    /// Path does not exist in the cart
    Absent,
    /// Path resolved to exactly one value
    Single(&'v Value),
    /// Path crossed an array; one entry per element that had the path
    Many(Vec<&'v Value>),
}

impl KeyPath {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Follow this path through `cart`.
    ///
    /// Once an array is crossed, every later segment is applied to each
    /// element and elements without the segment are dropped.
    pub fn extract<'v>(&self, cart: &'v Value) -> Extracted<'v> {
        self.segments()
            .fold(Extracted::Single(cart), |acc, segment| acc.step(segment))
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for KeyPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Follow `key_path` through `cart`
pub fn extract<'v>(cart: &'v Value, key_path: &str) -> Extracted<'v> {
    KeyPath::parse(key_path).extract(cart)
}

impl<'v> Extracted<'v> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Extracted::Absent)
    }

    /// Values a condition is tested against.
    ///
    /// A single value that is itself an array contributes its elements.
    pub fn candidates(&self) -> Vec<&'v Value> {
        match *self {
            Extracted::Absent => Vec::new(),
            Extracted::Single(Value::Array(items)) => items.iter().collect(),
            Extracted::Single(value) => vec![value],
            Extracted::Many(ref values) => values.clone(),
        }
    }

    fn step(self, segment: &str) -> Self {
        match self {
            Extracted::Absent => Extracted::Absent,
            Extracted::Single(Value::Array(items)) => Extracted::Many(
                items
                    .iter()
                    .filter_map(|item| lookup_element(item, segment))
                    .collect(),
            ),
            Extracted::Many(values) => Extracted::Many(
                values
                    .into_iter()
                    .filter_map(|item| lookup_element(item, segment))
                    .collect(),
            ),
            Extracted::Single(Value::Object(fields)) => fields
                .get(segment)
                .map_or(Extracted::Absent, Extracted::Single),
            Extracted::Single(_) => Extracted::Absent,
        }
    }
}

fn lookup_element<'v>(element: &'v Value, segment: &str) -> Option<&'v Value> {
    match element {
        Value::Object(fields) => fields.get(segment),
        Value::Array(items) => array_index(segment).and_then(|index| items.get(index)),
        _ => None,
    }
}

// Only canonical indices ("0", "12"), not "01" or "+1".
fn array_index(segment: &str) -> Option<usize> {
    let index: usize = segment.parse().ok()?;
    (index.to_string() == segment).then_some(index)
}
