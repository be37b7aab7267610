//! Project meta registry
//!
//! `amplify-meta.json` maps category name → resource name → descriptor. The
//! wizard only reads a handful of fields, so everything else in a descriptor
//! is carried through untouched and the file is rewritten wholesale.

use crate::error::{read_json, write_json, ProjectError, ProjectResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Resources of one category, in file order
pub type CategoryResources = IndexMap<String, ResourceDescriptor>;

/// Field naming the service type
pub const SERVICE_KEY: &str = "service";

/// Field naming the owning provider plugin
pub const PROVIDER_PLUGIN_KEY: &str = "providerPlugin";

/// Field holding configuration outputs
pub const OUTPUT_KEY: &str = "output";

/// Descriptor of a single provisioned resource
///
/// Kept as an ordered JSON object so a rewrite preserves the field order
/// found on disk. New fields are appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceDescriptor {
    fields: Map<String, Value>,
}

impl ResourceDescriptor {
    /// Create descriptor for a service
    #[inline]
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(SERVICE_KEY.to_string(), Value::String(service.into()));
        Self { fields }
    }

    /// With provider plugin
    #[inline]
    #[must_use]
    pub fn with_provider_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.fields
            .insert(PROVIDER_PLUGIN_KEY.to_string(), Value::String(plugin.into()));
        self
    }

    /// With an output entry
    #[inline]
    #[must_use]
    pub fn with_output(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_output(key, value);
        self
    }

    /// Service type, e.g. `AppSync` or `Cognito`
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        self.fields.get(SERVICE_KEY)?.as_str()
    }

    /// Provider plugin owning the resource
    #[must_use]
    pub fn provider_plugin(&self) -> Option<&str> {
        self.fields.get(PROVIDER_PLUGIN_KEY)?.as_str()
    }

    /// Configuration outputs
    #[must_use]
    pub fn output(&self) -> Option<&Map<String, Value>> {
        self.fields.get(OUTPUT_KEY)?.as_object()
    }

    /// Any field, interpreted or not
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set an output entry, creating the output map if needed
    ///
    /// A non-object `output` is replaced.
    pub fn set_output(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let output = self
            .fields
            .entry(OUTPUT_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !output.is_object() {
            *output = Value::Object(Map::new());
        }
        if let Value::Object(map) = output {
            map.insert(key.into(), value.into());
        }
    }

    /// Whether this descriptor is of `service`
    #[inline]
    #[must_use]
    pub fn is_service(&self, service: &str) -> bool {
        self.service() == Some(service)
    }
}

/// The whole meta registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectMeta {
    categories: IndexMap<String, CategoryResources>,
}

impl ProjectMeta {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`
    pub fn load(path: &Path) -> ProjectResult<Self> {
        read_json(path)
    }

    /// Load from `path`, treating a missing file as an empty registry
    pub fn load_or_default(path: &Path) -> ProjectResult<Self> {
        match Self::load(path) {
            Err(e) if e.is_not_found() => {
                tracing::debug!("No meta file at {}, starting empty", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Write to `path`, tab-indented
    pub fn save(&self, path: &Path) -> ProjectResult<()> {
        write_json(path, self, b"\t")
    }

    /// Resources of a category
    #[must_use]
    pub fn category(&self, category: &str) -> Option<&CategoryResources> {
        self.categories.get(category)
    }

    /// Look up a resource
    #[must_use]
    pub fn resource(&self, category: &str, resource: &str) -> Option<&ResourceDescriptor> {
        self.categories.get(category)?.get(resource)
    }

    /// Names of resources in `category` whose service is `service`, in file order
    #[must_use]
    pub fn resources_of(&self, category: &str, service: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|resources| {
                resources
                    .iter()
                    .filter(|(_, d)| d.is_service(service))
                    .map(|(name, _)| name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First resource of `service` in `category`
    #[must_use]
    pub fn find_first(&self, category: &str, service: &str) -> Option<&str> {
        self.resources_of(category, service).first().copied()
    }

    /// Last resource of `service` in `category`
    #[must_use]
    pub fn find_last(&self, category: &str, service: &str) -> Option<&str> {
        self.resources_of(category, service).last().copied()
    }

    /// Insert or replace a resource
    pub fn insert_resource(
        &mut self,
        category: impl Into<String>,
        resource: impl Into<String>,
        descriptor: ResourceDescriptor,
    ) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(resource.into(), descriptor);
    }

    /// Set an output entry on an existing resource
    pub fn set_output(
        &mut self,
        category: &str,
        resource: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> ProjectResult<()> {
        let descriptor = self
            .categories
            .get_mut(category)
            .and_then(|r| r.get_mut(resource))
            .ok_or_else(|| ProjectError::resource_not_found(category, resource))?;
        descriptor.set_output(key, value);
        Ok(())
    }
}
