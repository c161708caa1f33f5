//! Core domain layer for svcgen.
//!
//! Pure logic only: no filesystem, no processes, no terminal. All I/O
//! happens behind the ports defined in `crate::application::ports`.
//!
//! - **Value objects**: `ServiceName`, `StatusLevel`
//! - **Entities**: `ServiceConfig`, `Manifest`, `TemplateLayout`
//! - **Rules**: `NameValidator`, pipeline `Stage` transitions

pub mod entities;
pub mod error;
pub mod pipeline;
pub mod validation;
pub mod value_objects;

pub use entities::{
    ExclusionSet, Manifest, ManifestOverrides, ServiceConfig, TemplateLayout,
    template_layout::{DEFAULT_MANIFEST, DEPENDENCY_CACHE_DIR},
};
pub use error::{DomainError, ErrorCategory};
pub use pipeline::Stage;
pub use validation::{NameValidator, NameViolation, ValidationResult};
pub use value_objects::{ServiceName, StatusLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // The validator and the ServiceName newtype must agree on syntax.
    #[test]
    fn validator_and_service_name_agree() {
        for candidate in ["ok-name", "Bad", "", "x_y", "9-lives"] {
            let validated = NameValidator::validate(candidate, &HashSet::new()).is_valid();
            let parsed = ServiceName::parse(candidate).is_ok();
            assert_eq!(validated, parsed, "disagreement on {candidate:?}");
        }
    }

    #[test]
    fn config_overrides_patch_manifest() {
        let cfg = ServiceConfig::new(ServiceName::parse("my-svc").unwrap(), "Jane", "MIT");
        let manifest = Manifest::parse(r#"{"name":"tmpl","main":"index.js"}"#)
            .unwrap()
            .merged(&cfg.overrides());

        assert_eq!(manifest.get("name").and_then(|v| v.as_str()), Some("my-svc"));
        assert_eq!(manifest.get("main").and_then(|v| v.as_str()), Some("index.js"));
        assert_eq!(manifest.get("license").and_then(|v| v.as_str()), Some("MIT"));
    }

    #[test]
    fn invalid_name_error_carries_suggestions() {
        let err = ServiceName::parse("My Service").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("kebab-case")));
    }
}
