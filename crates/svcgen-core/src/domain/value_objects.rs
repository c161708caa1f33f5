//! Domain value objects: ServiceName, StatusLevel.
//!
//! Pure value types with equality-by-value and no identity. Validation
//! rules live in `validation.rs`; this file only wraps them in types that
//! cannot hold an invalid value.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::validation::{NameValidator, NameViolation, ValidationResult};

// ── ServiceName ───────────────────────────────────────────────────────────────

/// A kebab-case service name.
///
/// Invariant: matches `^[a-z0-9-]+$`. Enforced at construction; the
/// uniqueness rule depends on the filesystem and is checked separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if NameValidator::is_kebab_case(&name) {
            Ok(Self(name))
        } else {
            Err(DomainError::InvalidServiceName {
                name,
                violation: NameViolation::InvalidFormat,
            })
        }
    }

    /// Parse and also apply the uniqueness rule against `existing`.
    pub fn parse_unique(
        name: impl Into<String>,
        existing: &HashSet<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        match NameValidator::validate(&name, existing) {
            ValidationResult::Valid => Ok(Self(name)),
            ValidationResult::Invalid(violation) => {
                Err(DomainError::InvalidServiceName { name, violation })
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServiceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ServiceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

// ── StatusLevel ───────────────────────────────────────────────────────────────

/// Severity of a user-facing status line.
///
/// A closed set: adapters map each level to a display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    pub const ALL: [StatusLevel; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
