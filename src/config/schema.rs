//! Custom resource state metrics configuration schema.
//!
//! This module defines the document accepted by
//! `--custom-resource-state-config` and `--custom-resource-state-config-file`.
//! All types derive Serde traits for deserialization from YAML.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix used for metric names when a resource does not set one.
pub const DEFAULT_METRIC_NAME_PREFIX: &str = "kube_customresource";

/// Root of a custom resource state metrics document.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Metrics {
    /// Document kind, informational only (e.g. `CustomResourceStateMetrics`).
    pub kind: String,

    /// Resource definitions.
    pub spec: MetricsSpec,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MetricsSpec {
    /// One entry per custom resource type to export metrics for.
    pub resources: Vec<Resource>,
}

/// Metrics configuration for one custom resource type.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// The resource type being described.
    pub group_version_kind: GroupVersionKind,

    /// Plural resource name; derived from the kind when absent.
    #[serde(default)]
    pub resource_plural: Option<String>,

    /// Prefix for every metric of this resource. `None` uses
    /// [`DEFAULT_METRIC_NAME_PREFIX`], an empty string disables prefixing.
    #[serde(default)]
    pub metric_name_prefix: Option<String>,

    /// Labels shared by every metric of this resource.
    #[serde(flatten)]
    pub labels: Labels,

    /// Metric definitions.
    #[serde(default)]
    pub metrics: Vec<Generator>,
}

impl Resource {
    /// Name of the registry factory built from this resource.
    pub fn plural(&self) -> String {
        match &self.resource_plural {
            Some(plural) if !plural.is_empty() => plural.clone(),
            _ => format!("{}s", self.group_version_kind.kind.to_lowercase()),
        }
    }

    /// Effective metric name prefix.
    pub fn prefix(&self) -> &str {
        self.metric_name_prefix
            .as_deref()
            .unwrap_or(DEFAULT_METRIC_NAME_PREFIX)
    }

    /// Full metric family name for `generator`.
    pub fn family_name(&self, generator: &Generator) -> String {
        match self.prefix() {
            "" => generator.name.clone(),
            prefix => format!("{}_{}", prefix, generator.name),
        }
    }
}

/// Group, version and kind identifying a resource type.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}/{}", self.version, self.kind)
        } else {
            write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
        }
    }
}

/// Static and path-derived labels.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    /// Labels with a fixed value.
    pub common_labels: BTreeMap<String, String>,

    /// Labels whose value is read from the object at the given path.
    pub labels_from_path: BTreeMap<String, Vec<String>>,
}

/// One metric family definition.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Generator {
    /// Metric name, without the resource prefix.
    pub name: String,

    /// Help text exposed with the metric.
    #[serde(default)]
    pub help: String,

    /// How values are produced for each object.
    pub each: Metric,

    /// Labels added to this metric only.
    #[serde(flatten)]
    pub labels: Labels,
}

/// Metric type of a generator.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum MetricType {
    Gauge,
    StateSet,
    Info,
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricType::Gauge => "gauge",
            MetricType::StateSet => "stateset",
            MetricType::Info => "info",
        };
        f.write_str(name)
    }
}

/// Value extraction for a generator. Exactly the section matching
/// `type` is expected to be present.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    #[serde(rename = "type")]
    pub metric_type: MetricType,

    #[serde(default)]
    pub gauge: Option<MetricGauge>,

    #[serde(default)]
    pub state_set: Option<MetricStateSet>,

    #[serde(default)]
    pub info: Option<MetricInfo>,
}

/// Numeric value read from a path.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricGauge {
    pub path: Vec<String>,

    /// Path of the value, relative to `path`.
    pub value_from: Vec<String>,

    /// Report missing values as zero instead of skipping them.
    pub nil_is_zero: bool,

    pub labels_from_path: BTreeMap<String, Vec<String>>,
}

/// One series per listed state, 1 for the current state and 0 otherwise.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricStateSet {
    pub path: Vec<String>,

    /// Known states.
    pub list: Vec<String>,

    /// Label carrying the state name.
    pub label_name: String,

    pub value_from: Vec<String>,
}

/// Constant-1 series carrying labels.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricInfo {
    pub path: Vec<String>,

    pub labels_from_path: BTreeMap<String, Vec<String>>,
}
