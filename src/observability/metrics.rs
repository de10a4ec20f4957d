//! Metrics exposition.
//!
//! # Responsibilities
//! - Install the Prometheus exporter and its HTTP listener
//! - Describe the metric families of every registry factory
//! - Publish exporter self-metrics
//!
//! # Metrics
//! - `resource_state_metrics_custom_resource_factories` (gauge): registries loaded
//! - `resource_state_metrics_registry_info` (gauge): 1 per registry, labelled by
//!   name and group/version/kind
//! - `resource_state_metrics_family_info` (gauge): 1 per metric family, labelled by
//!   registry, family and type, plus its common labels as `label_<key>`

use std::net::SocketAddr;

use metrics::{describe_gauge, gauge, Label};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::customresource::RegistryFactory;

pub const FACTORIES_METRIC: &str = "resource_state_metrics_custom_resource_factories";
pub const REGISTRY_INFO_METRIC: &str = "resource_state_metrics_registry_info";
pub const FAMILY_INFO_METRIC: &str = "resource_state_metrics_family_info";

/// Install the global Prometheus recorder serving on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter installed");
    Ok(())
}

/// Record the registry factories with the installed recorder.
pub fn register_factories(factories: &[Box<dyn RegistryFactory>]) {
    describe_gauge!(FACTORIES_METRIC, "Number of custom resource registries loaded");
    describe_gauge!(REGISTRY_INFO_METRIC, "Registries served by this exporter");
    describe_gauge!(FAMILY_INFO_METRIC, "Metric families configured per registry");

    gauge!(FACTORIES_METRIC).set(factories.len() as f64);

    for factory in factories {
        let gvk = factory.group_version_kind();
        gauge!(
            REGISTRY_INFO_METRIC,
            "registry" => factory.name().to_string(),
            "group" => gvk.group.clone(),
            "version" => gvk.version.clone(),
            "kind" => gvk.kind.clone()
        )
        .set(1.0);

        for family in factory.families() {
            describe_gauge!(family.name.clone(), family.help.clone());

            let mut labels = vec![
                Label::new("registry", factory.name().to_string()),
                Label::new("family", family.name.clone()),
                Label::new("type", family.metric_type.to_string()),
            ];
            labels.extend(
                family
                    .common_labels
                    .iter()
                    .map(|(key, value)| Label::new(format!("label_{key}"), value.clone())),
            );
            gauge!(FAMILY_INFO_METRIC, labels).set(1.0);
        }
    }
}
