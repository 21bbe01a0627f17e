//! Cross-region comparison: sweep, minima flags, savings, best-region picks
//!
//! The per-region sweep has no cross-region data dependency; the reductions
//! (minima marking, savings, best-region tie-breaks) run afterwards as
//! explicit, separately testable steps.

use tracing::warn;

use crate::calculator::{calculate_region, round1, round2};
use crate::catalog::ReferenceData;
use crate::error::SimulationError;
use crate::models::{RegionResult, WorkloadRequest};

/// Result of comparing the workload across all priced regions
#[derive(Debug, Clone)]
pub struct Comparison {
    /// All computed results, current region included, in catalog order
    pub results: Vec<RegionResult>,
    /// Region codes excluded for missing reference data
    pub skipped: Vec<String>,
    /// Index into `results` of the current region
    pub current_index: usize,
    /// Index of the deterministic best-carbon pick
    pub best_carbon_index: usize,
    /// Index of the deterministic best-cost pick
    pub best_cost_index: usize,
}

impl Comparison {
    pub fn current(&self) -> &RegionResult {
        &self.results[self.current_index]
    }

    pub fn best_carbon(&self) -> &RegionResult {
        &self.results[self.best_carbon_index]
    }

    pub fn best_cost(&self) -> &RegionResult {
        &self.results[self.best_cost_index]
    }
}

/// Run the calculator across every known region and derive the comparison.
///
/// The current region must resolve and have a price entry; any other region
/// lacking a price entry is skipped with a warning rather than failing the
/// request.
pub fn compare_regions(
    catalog: &dyn ReferenceData,
    request: &WorkloadRequest,
) -> Result<Comparison, SimulationError> {
    let current_profile = catalog
        .region(&request.current_region)
        .ok_or_else(|| SimulationError::UnknownRegion(request.current_region.clone()))?;

    // Baseline first: errors here are fatal, there is nothing to compare
    // against without it.
    let current_result = calculate_region(catalog, request, current_profile)?;

    let mut results = Vec::with_capacity(catalog.regions().len());
    let mut skipped = Vec::new();
    results.push(current_result);

    for region in catalog.regions() {
        if region.region_code == request.current_region {
            continue;
        }
        match calculate_region(catalog, request, region) {
            Ok(result) => results.push(result),
            Err(SimulationError::MissingPrice { .. }) => {
                warn!(
                    region = %region.region_code,
                    instance_type = %request.instance_type,
                    "skipping region with no price entry"
                );
                skipped.push(region.region_code.clone());
            }
            Err(err) => return Err(err),
        }
    }

    let current_index = results
        .iter()
        .position(|r| r.is_current_region)
        .expect("current region result was pushed first");

    mark_minima(&mut results);
    apply_savings(&mut results, current_index);

    let best_carbon_index = pick_best(&results, current_index, |r| r.carbon_emissions_kg);
    let best_cost_index = pick_best(&results, current_index, |r| r.monthly_cost_usd);

    Ok(Comparison {
        results,
        skipped,
        current_index,
        best_carbon_index,
        best_cost_index,
    })
}

/// Mark `is_lowest_carbon` / `is_lowest_cost` on every result tied at the
/// minimum observed value.
fn mark_minima(results: &mut [RegionResult]) {
    let min_carbon = results
        .iter()
        .map(|r| r.carbon_emissions_kg)
        .fold(f64::INFINITY, f64::min);
    let min_cost = results
        .iter()
        .map(|r| r.monthly_cost_usd)
        .fold(f64::INFINITY, f64::min);

    for result in results.iter_mut() {
        result.is_lowest_carbon = result.carbon_emissions_kg == min_carbon;
        result.is_lowest_cost = result.monthly_cost_usd == min_cost;
    }
}

/// Fill savings fields relative to the current region's result.
///
/// Savings are derived from the already-rounded per-region figures so the
/// published numbers stay self-consistent. The current region is set to
/// exactly zero rather than relying on self-subtraction.
fn apply_savings(results: &mut [RegionResult], current_index: usize) {
    let current_carbon = results[current_index].carbon_emissions_kg;
    let current_cost = results[current_index].monthly_cost_usd;

    for (index, result) in results.iter_mut().enumerate() {
        if index == current_index {
            result.carbon_savings_kg = 0.0;
            result.cost_savings_usd = 0.0;
            result.carbon_savings_percent = 0.0;
            result.cost_savings_percent = 0.0;
            continue;
        }

        result.carbon_savings_kg = round2(current_carbon - result.carbon_emissions_kg);
        result.cost_savings_usd = round2(current_cost - result.monthly_cost_usd);
        result.carbon_savings_percent = if current_carbon > 0.0 {
            round1(result.carbon_savings_kg / current_carbon * 100.0)
        } else {
            0.0
        };
        result.cost_savings_percent = if current_cost > 0.0 {
            round1(result.cost_savings_usd / current_cost * 100.0)
        } else {
            0.0
        };
    }
}

/// Deterministic best-region pick for one metric.
///
/// Among the results tied at the minimum: the current region wins if it is
/// in the tied set, otherwise the lexicographically smallest region code.
fn pick_best<F>(results: &[RegionResult], current_index: usize, metric: F) -> usize
where
    F: Fn(&RegionResult) -> f64,
{
    let min_value = results
        .iter()
        .map(&metric)
        .fold(f64::INFINITY, f64::min);

    let tied: Vec<usize> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| metric(r) == min_value)
        .map(|(i, _)| i)
        .collect();

    if tied.contains(&current_index) {
        return current_index;
    }
    tied.into_iter()
        .min_by(|&a, &b| results[a].region_code.cmp(&results[b].region_code))
        .expect("result set is never empty")
}
