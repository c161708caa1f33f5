//! Service name validation.
//!
//! Two rules, checked in order; the first failure wins:
//!
//! 1. Syntax: one or more characters from `[a-z0-9-]` (kebab-case).
//! 2. Uniqueness: the name must not exactly match an entry already present
//!    in the directory the project will be created in.

use std::collections::HashSet;
use std::fmt;

/// Why a proposed name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameViolation {
    /// Empty, or contains characters outside `[a-z0-9-]`.
    InvalidFormat,
    /// An entry with exactly this name already exists.
    Collision,
}

impl NameViolation {
    /// Short machine-friendly reason.
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid characters/format",
            Self::Collision => "name collides with existing entry",
        }
    }

    /// Message shown to the user when the prompt rejects an answer.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidFormat => {
                "Service name may only include lower case letters, numbers and hyphens (kebab-case)."
            }
            Self::Collision => {
                "The current folder includes a directory or file with such name. The name should be unique."
            }
        }
    }
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Outcome of [`NameValidator::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(NameViolation),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Convert into a `Result`, handy for `?` and for prompt validators.
    pub fn into_result(self) -> Result<(), NameViolation> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violation) => Err(violation),
        }
    }
}

/// Pure name validator. Holds no state.
pub struct NameValidator;

impl NameValidator {
    /// Validate `name` against the syntax rule, then against `existing`.
    ///
    /// Comparison is exact and case-sensitive; a prefix or substring of an
    /// existing entry is not a collision.
    pub fn validate(name: &str, existing: &HashSet<String>) -> ValidationResult {
        if !Self::is_kebab_case(name) {
            return ValidationResult::Invalid(NameViolation::InvalidFormat);
        }
        if existing.contains(name) {
            return ValidationResult::Invalid(NameViolation::Collision);
        }
        ValidationResult::Valid
    }

    /// Syntax rule only.
    pub fn is_kebab_case(name: &str) -> bool {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-'))
    }
}
