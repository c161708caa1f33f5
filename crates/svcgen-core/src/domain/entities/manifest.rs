//! The project manifest (`package.json`).
//!
//! Stored as an ordered JSON object so that a patched manifest keeps the
//! template's key order and produces small, readable diffs.

use std::fmt;

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Ordered set of top-level fields to write into a manifest.
pub type ManifestOverrides = Map<String, Value>;

/// A parsed manifest: always a JSON object at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Parse manifest text.
    ///
    /// # Errors
    ///
    /// [`DomainError::ManifestSyntax`] for invalid JSON,
    /// [`DomainError::ManifestNotObject`] for valid JSON that is not an object.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(raw).map_err(|e| DomainError::ManifestSyntax {
            reason: e.to_string(),
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::ManifestNotObject {
                found: json_kind(&other),
            }),
        }
    }

    /// Shallow merge: each override replaces (in place) or appends its key.
    /// Keys not named in `overrides` are left untouched.
    pub fn merge(&mut self, overrides: &ManifestOverrides) {
        for (key, value) in overrides {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Consuming variant of [`Manifest::merge`].
    pub fn merged(mut self, overrides: &ManifestOverrides) -> Self {
        self.merge(overrides);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize with two-space indentation, no trailing newline.
    pub fn to_pretty_string(&self) -> String {
        self.to_string()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl fmt::Display for Manifest {
    // `{:#}` on a serde_json value uses the two-space pretty printer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = Value::Object(self.0.clone());
        write!(f, "{value:#}")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
