//! Registry factories.
//!
//! A registry factory describes the metric families exported for one
//! resource type. The long-running service owns collection; factories only
//! carry what it needs to set up a registry.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::schema::{GroupVersionKind, MetricType, Resource};

/// Produces metric-collection setup for one resource type.
pub trait RegistryFactory: Send + Sync + fmt::Debug {
    /// Registry name, unique across all factories.
    fn name(&self) -> &str;

    /// Resource type the registry collects from.
    fn group_version_kind(&self) -> &GroupVersionKind;

    /// Metric families exported by this registry.
    fn families(&self) -> &[FamilyDesc];
}

/// Static description of one metric family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyDesc {
    pub name: String,
    pub help: String,
    pub metric_type: MetricType,
    /// Labels with a fixed value, resource labels merged with metric labels.
    pub common_labels: BTreeMap<String, String>,
}

/// Registry factory backed by a custom resource configuration entry.
#[derive(Debug, Clone)]
pub struct CustomResourceFactory {
    name: String,
    group_version_kind: GroupVersionKind,
    families: Vec<FamilyDesc>,
}

impl CustomResourceFactory {
    /// Build a factory from a validated resource definition.
    pub fn new(resource: &Resource) -> Self {
        let families = resource
            .metrics
            .iter()
            .map(|generator| {
                let mut common_labels = resource.labels.common_labels.clone();
                common_labels.extend(generator.labels.common_labels.clone());
                FamilyDesc {
                    name: resource.family_name(generator),
                    help: generator.help.clone(),
                    metric_type: generator.each.metric_type,
                    common_labels,
                }
            })
            .collect();

        Self {
            name: resource.plural(),
            group_version_kind: resource.group_version_kind.clone(),
            families,
        }
    }
}

impl RegistryFactory for CustomResourceFactory {
    fn name(&self) -> &str {
        &self.name
    }

    fn group_version_kind(&self) -> &GroupVersionKind {
        &self.group_version_kind
    }

    fn families(&self) -> &[FamilyDesc] {
        &self.families
    }
}
