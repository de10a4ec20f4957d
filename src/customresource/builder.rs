//! Registry factories from a custom resource configuration.
//!
//! # Responsibilities
//! - Decode the configuration document from a [`ConfigDecoder`]
//! - Validate it
//! - Build one registry factory per resource, in document order
//!
//! # Design Decisions
//! - Only the first document of the stream is used
//! - An empty stream is a valid configuration with no resources
//! - Two resources mapping to the same registry name are rejected

use std::collections::HashSet;

use crate::config::schema::Metrics;
use crate::config::source::ConfigDecoder;
use crate::config::validation::validate_config;
use crate::customresource::factory::{CustomResourceFactory, RegistryFactory};
use crate::error::ConfigParseError;

/// Decode `decoder` and build the registry factories it describes.
pub fn from_config(
    decoder: ConfigDecoder,
) -> Result<Vec<Box<dyn RegistryFactory>>, ConfigParseError> {
    let config: Metrics = decoder.decode()?.unwrap_or_default();
    validate_config(&config).map_err(ConfigParseError::Validation)?;

    let mut seen = HashSet::new();
    let mut factories: Vec<Box<dyn RegistryFactory>> = Vec::new();

    for resource in &config.spec.resources {
        let factory = CustomResourceFactory::new(resource);
        if !seen.insert(factory.name().to_string()) {
            return Err(ConfigParseError::DuplicateResource(factory.name().to_string()));
        }

        tracing::debug!(
            resource = %resource.group_version_kind,
            registry = factory.name(),
            families = factory.families().len(),
            "Built custom resource registry factory"
        );
        factories.push(Box::new(factory));
    }

    Ok(factories)
}
