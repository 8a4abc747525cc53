// SPDX-License-Identifier: MIT

//! Document loader - criteria, rule books and carts from JSON or YAML files
//!
//! The format is picked from the file extension.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::criteria::Criteria;
use super::rules::RuleBook;
use crate::error::EligibilityError;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Result<Self, EligibilityError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(EligibilityError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads criteria documents and carts from disk
pub struct CriteriaLoader;

impl CriteriaLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a criteria mapping from a file
    pub fn load_criteria<P: AsRef<Path>>(&self, path: P) -> Result<Criteria, EligibilityError> {
        self.load(path.as_ref())
    }

    /// Load a rule book from a file
    pub fn load_rule_book<P: AsRef<Path>>(&self, path: P) -> Result<RuleBook, EligibilityError> {
        self.load(path.as_ref())
    }

    /// Load a cart document from a file
    pub fn load_cart<P: AsRef<Path>>(&self, path: P) -> Result<Value, EligibilityError> {
        self.load(path.as_ref())
    }

    /// Parse criteria from a string
    pub fn parse_criteria(
        content: &str,
        format: DocumentFormat,
    ) -> Result<Criteria, EligibilityError> {
        Self::parse(content, format)
    }

    /// Parse a rule book from a string
    pub fn parse_rule_book(
        content: &str,
        format: DocumentFormat,
    ) -> Result<RuleBook, EligibilityError> {
        Self::parse(content, format)
    }

    /// Parse any document into a JSON value
    pub fn parse_document(
        content: &str,
        format: DocumentFormat,
    ) -> Result<Value, EligibilityError> {
        Self::parse(content, format)
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, EligibilityError> {
        let format = DocumentFormat::from_path(path)?;
        log::debug!("Loading {:?} document from {}", format, path.display());
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    fn parse<T: DeserializeOwned>(
        content: &str,
        format: DocumentFormat,
    ) -> Result<T, EligibilityError> {
        let parsed = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(parsed)
    }
}

impl Default for CriteriaLoader {
    fn default() -> Self {
        Self::new()
    }
}
