use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::manifest::ManifestOverrides;
use crate::domain::value_objects::ServiceName;

/// The answers collected for one run.
///
/// Immutable once built; `author` and `license` are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    service_name: ServiceName,
    author: String,
    license: String,
}

impl ServiceConfig {
    pub fn new(
        service_name: ServiceName,
        author: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            service_name,
            author: author.into(),
            license: license.into(),
        }
    }

    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    /// Manifest fields this config overrides, in write order.
    pub fn overrides(&self) -> ManifestOverrides {
        let mut map = ManifestOverrides::new();
        map.insert("name".into(), Value::String(self.service_name.to_string()));
        map.insert("author".into(), Value::String(self.author.clone()));
        map.insert("license".into(), Value::String(self.license.clone()));
        map
    }
}
