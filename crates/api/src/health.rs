//! Health and readiness reporting
//!
//! Health is derived from the loaded reference catalog rather than tracked
//! per background task: the service is stateless, so "healthy" means the
//! catalog is populated and the insight generator is wired up.

use serde::{Deserialize, Serialize};
use sim_lib::MetadataResponse;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
}

/// Health report for the probes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub service: String,
    pub catalog_instances: usize,
    pub catalog_regions: usize,
    pub insights_provider: String,
}

impl HealthReport {
    pub fn ready(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// Build the health report from the current catalog contents
pub fn health_report(metadata: &MetadataResponse, insights_provider: &str) -> HealthReport {
    let status = if metadata.instances.is_empty() || metadata.regions.is_empty() {
        ServiceStatus::Unhealthy
    } else {
        ServiceStatus::Healthy
    };

    HealthReport {
        status,
        service: "carbonshift-api".to_string(),
        catalog_instances: metadata.instances.len(),
        catalog_regions: metadata.regions.len(),
        insights_provider: insights_provider.to_string(),
    }
}
