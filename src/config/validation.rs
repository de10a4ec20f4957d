//! Custom resource configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check resource identity (kind and version present)
//! - Check metric names are valid Prometheus names once prefixed
//! - Check each generator carries the section matching its type
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Metrics → Result<(), Vec<ValidationError>>
//! - Runs before any registry factory is built

use thiserror::Error;

use crate::config::schema::{Metric, MetricType, Metrics, Resource};

/// A single semantic problem in a custom resource configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("resource #{index}: groupVersionKind.kind must not be empty")]
    MissingKind { index: usize },

    #[error("resource {resource}: groupVersionKind.version must not be empty")]
    MissingVersion { resource: String },

    #[error("resource {resource}: metric #{index} has an empty name")]
    EmptyMetricName { resource: String, index: usize },

    #[error("resource {resource}: invalid metric name {name:?}")]
    InvalidMetricName { resource: String, name: String },

    #[error("resource {resource}: metric {metric:?} is of type {metric_type} but has no {metric_type} section")]
    MissingTypeSection {
        resource: String,
        metric: String,
        metric_type: MetricType,
    },

    #[error("resource {resource}: state set metric {metric:?} lists no states")]
    EmptyStateSet { resource: String, metric: String },
}

/// Validate every resource in `config`.
pub fn validate_config(config: &Metrics) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, resource) in config.spec.resources.iter().enumerate() {
        validate_resource(index, resource, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_resource(index: usize, resource: &Resource, errors: &mut Vec<ValidationError>) {
    let gvk = &resource.group_version_kind;
    if gvk.kind.is_empty() {
        errors.push(ValidationError::MissingKind { index });
        return;
    }

    let name = gvk.to_string();
    if gvk.version.is_empty() {
        errors.push(ValidationError::MissingVersion {
            resource: name.clone(),
        });
    }

    for (i, generator) in resource.metrics.iter().enumerate() {
        if generator.name.is_empty() {
            errors.push(ValidationError::EmptyMetricName {
                resource: name.clone(),
                index: i,
            });
            continue;
        }

        let family = resource.family_name(generator);
        if !is_valid_metric_name(&family) {
            errors.push(ValidationError::InvalidMetricName {
                resource: name.clone(),
                name: family,
            });
        }

        validate_each(&name, &generator.name, &generator.each, errors);
    }
}

fn validate_each(resource: &str, metric: &str, each: &Metric, errors: &mut Vec<ValidationError>) {
    let present = match each.metric_type {
        MetricType::Gauge => each.gauge.is_some(),
        MetricType::StateSet => each.state_set.is_some(),
        MetricType::Info => each.info.is_some(),
    };
    if !present {
        errors.push(ValidationError::MissingTypeSection {
            resource: resource.to_string(),
            metric: metric.to_string(),
            metric_type: each.metric_type,
        });
        return;
    }

    if let Some(state_set) = &each.state_set {
        if each.metric_type == MetricType::StateSet && state_set.list.is_empty() {
            errors.push(ValidationError::EmptyStateSet {
                resource: resource.to_string(),
                metric: metric.to_string(),
            });
        }
    }
}

/// Prometheus metric name: `[a-zA-Z_:][a-zA-Z0-9_:]*`.
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
