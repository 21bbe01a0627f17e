//! Simulation orchestrator
//!
//! Wires the calculator, comparator, locality scorer, recommendation engine,
//! and equivalency translator into one request-scoped pipeline. All derived
//! state is owned by the single run and dropped with the outcome.

use std::sync::Arc;

use tracing::info;

use crate::catalog::ReferenceData;
use crate::comparator::compare_regions;
use crate::equivalency::equivalencies_for;
use crate::error::SimulationError;
use crate::locality::{resolve_location, LocalityPolicy, LocalityScores};
use crate::models::{
    InstanceInfo, MetadataResponse, RegionInfo, SimulationOutcome, WorkloadRequest,
};
use crate::recommend::recommend_region;

/// Region-comparison and recommendation engine over an injected catalog
pub struct Simulator {
    catalog: Arc<dyn ReferenceData>,
    policy: LocalityPolicy,
}

impl Simulator {
    pub fn new(catalog: Arc<dyn ReferenceData>) -> Self {
        Self {
            catalog,
            policy: LocalityPolicy::default(),
        }
    }

    pub fn with_policy(catalog: Arc<dyn ReferenceData>, policy: LocalityPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Run one simulation end to end.
    ///
    /// The `insights` slot of the outcome is left empty; the caller may fill
    /// it through an [`crate::insight::InsightGenerator`].
    pub fn run(&self, request: &WorkloadRequest) -> Result<SimulationOutcome, SimulationError> {
        request.validate()?;

        let comparison = compare_regions(self.catalog.as_ref(), request)?;

        let user_geo = resolve_location(request.user_location.as_deref());
        let locality: Vec<LocalityScores> = comparison
            .results
            .iter()
            .map(|result| match self.catalog.region(&result.region_code) {
                Some(profile) => self.policy.score(user_geo.as_ref(), profile),
                // Only reachable with a misbehaving provider
                None => self.policy.neutral_scores(),
            })
            .collect();

        let weights = request.effective_priorities();
        let recommended_index = recommend_region(&comparison.results, &locality, &weights);

        let current = comparison.current().clone();
        let best_carbon = comparison.best_carbon().clone();
        let best_cost = comparison.best_cost().clone();
        let recommended = comparison.results[recommended_index].clone();

        let equivalencies =
            equivalencies_for(current.carbon_emissions_kg - recommended.carbon_emissions_kg);

        let mut comparison_regions: Vec<_> = comparison
            .results
            .into_iter()
            .filter(|r| !r.is_current_region)
            .collect();
        // Greenest first for presentation
        comparison_regions.sort_by(|a, b| {
            a.carbon_emissions_kg
                .partial_cmp(&b.carbon_emissions_kg)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.region_code.cmp(&b.region_code))
        });

        info!(
            current_region = %current.region_code,
            recommended_region = %recommended.region_code,
            best_carbon_region = %best_carbon.region_code,
            carbon_kg = current.carbon_emissions_kg,
            skipped = comparison.skipped.len(),
            "simulation complete"
        );

        Ok(SimulationOutcome {
            request: request.clone(),
            current_region_result: current,
            comparison_regions,
            best_carbon_region: best_carbon,
            best_cost_region: best_cost,
            recommended_region: recommended,
            equivalencies,
            skipped_regions: comparison.skipped,
            insights: None,
            insights_provider: None,
        })
    }

    /// Catalog contents for the request-building surface
    pub fn metadata(&self) -> MetadataResponse {
        let instances = self
            .catalog
            .instances()
            .iter()
            .map(|p| InstanceInfo {
                instance_type: p.instance_type.clone(),
                vcpus: p.vcpus,
                memory_gb: p.memory_gb,
                idle_watts: p.idle_watts,
                max_watts: p.max_watts,
            })
            .collect();

        let mut regions: Vec<RegionInfo> = self
            .catalog
            .regions()
            .iter()
            .map(|r| RegionInfo {
                region_code: r.region_code.clone(),
                region_name: r.region_name.clone(),
                country: r.country.clone(),
                carbon_intensity_gco2_kwh: r.carbon_intensity_gco2_kwh,
                renewable_percentage: r.renewable_percentage,
            })
            .collect();
        regions.sort_by(|a, b| a.region_name.cmp(&b.region_name));

        MetadataResponse {
            instances,
            regions,
            cloud_providers: self.catalog.cloud_providers(),
        }
    }
}
