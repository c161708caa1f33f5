pub mod manifest;
pub mod service_config;
pub mod template_layout;

pub use crate::domain::DomainError;
pub use manifest::{Manifest, ManifestOverrides};
pub use service_config::ServiceConfig;
pub use template_layout::{ExclusionSet, TemplateLayout};
