// SPDX-License-Identifier: MIT

//! Typed errors for loading criteria, rule books and carts
//!
//! Evaluation itself never fails; these only surface while turning
//! documents into typed criteria.

use thiserror::Error;

/// Top-level error type for cart-eligibility
#[derive(Debug, Error)]
pub enum EligibilityError {
    /// Criteria document did not have the expected shape
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// File extension not recognized as JSON or YAML
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Two rules in the same rule book share a name
    #[error("Duplicate rule name: {0}")]
    DuplicateRule(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl EligibilityError {
    /// Create an invalid criteria error
    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::InvalidCriteria(message.into())
    }
}
