//! Core data models for the simulation engine

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Coarse geographic bucket used for latency and compliance scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoZone {
    Europe,
    NorthAmerica,
    AsiaPacific,
    SouthAmerica,
}

/// Power profile for a cloud instance type.
///
/// Invariant: `0 <= idle_watts <= max_watts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstancePowerProfile {
    pub instance_type: String,
    pub vcpus: u32,
    pub memory_gb: f64,
    pub idle_watts: f64,
    pub max_watts: f64,
}

impl InstancePowerProfile {
    /// Power draw in watts at the given CPU utilization, by linear
    /// interpolation between idle and max draw.
    pub fn power_watts(&self, cpu_utilization: f64) -> f64 {
        let utilization = cpu_utilization.clamp(0.0, 100.0) / 100.0;
        self.idle_watts + (self.max_watts - self.idle_watts) * utilization
    }
}

/// Carbon intensity and location metadata for a cloud region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionProfile {
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    pub zone: GeoZone,
    /// Grams of CO2 per kWh, annual grid average
    pub carbon_intensity_gco2_kwh: f64,
    /// Share of grid electricity from renewables, percent
    pub renewable_percentage: f64,
}

/// User priority weights for the recommendation engine, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    #[serde(default = "default_carbon_weight")]
    pub carbon: f64,
    #[serde(default = "default_price_weight")]
    pub price: f64,
    #[serde(default = "default_latency_weight")]
    pub latency: f64,
    #[serde(default = "default_compliance_weight")]
    pub compliance: f64,
}

fn default_carbon_weight() -> f64 {
    1.0
}

fn default_price_weight() -> f64 {
    0.6
}

fn default_latency_weight() -> f64 {
    0.3
}

fn default_compliance_weight() -> f64 {
    0.2
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            carbon: default_carbon_weight(),
            price: default_price_weight(),
            latency: default_latency_weight(),
            compliance: default_compliance_weight(),
        }
    }
}

impl PriorityWeights {
    fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("carbon", self.carbon),
            ("price", self.price),
            ("latency", self.latency),
            ("compliance", self.compliance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimulationError::InvalidRequest(format!(
                    "priority weight '{}' must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// A workload description submitted for simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadRequest {
    #[serde(default = "default_cloud_provider")]
    pub cloud_provider: String,
    pub instance_type: String,
    #[serde(default = "default_instance_count")]
    pub instance_count: u32,
    /// Average CPU utilization, percent
    #[serde(default = "default_cpu_utilization")]
    pub cpu_utilization: f64,
    #[serde(default = "default_hours_per_month")]
    pub hours_per_month: f64,
    pub current_region: String,
    /// Free-text user location, e.g. "Germany" or "Singapore"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<PriorityWeights>,
}

fn default_cloud_provider() -> String {
    "aws".to_string()
}

fn default_instance_count() -> u32 {
    1
}

fn default_cpu_utilization() -> f64 {
    50.0
}

fn default_hours_per_month() -> f64 {
    730.0
}

impl WorkloadRequest {
    /// Range-check all request fields before any computation runs.
    ///
    /// Catalog lookups (instance type, region, price) are checked by the
    /// comparator, not here.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.instance_type.is_empty() {
            return Err(SimulationError::InvalidRequest(
                "instance_type must not be empty".to_string(),
            ));
        }
        if self.current_region.is_empty() {
            return Err(SimulationError::InvalidRequest(
                "current_region must not be empty".to_string(),
            ));
        }
        if !(1..=1000).contains(&self.instance_count) {
            return Err(SimulationError::InvalidRequest(format!(
                "instance_count must be between 1 and 1000, got {}",
                self.instance_count
            )));
        }
        if !(0.0..=100.0).contains(&self.cpu_utilization) {
            return Err(SimulationError::InvalidRequest(format!(
                "cpu_utilization must be between 0 and 100, got {}",
                self.cpu_utilization
            )));
        }
        if !(1.0..=744.0).contains(&self.hours_per_month) {
            return Err(SimulationError::InvalidRequest(format!(
                "hours_per_month must be between 1 and 744, got {}",
                self.hours_per_month
            )));
        }
        if let Some(priorities) = &self.priorities {
            priorities.validate()?;
        }
        Ok(())
    }

    /// Priority weights to use: the request's, or the documented defaults
    pub fn effective_priorities(&self) -> PriorityWeights {
        self.priorities.unwrap_or_default()
    }
}

/// Carbon and cost results for a single region.
///
/// Savings fields are relative to the current region's result within the
/// same simulation; the current region itself has zero savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    pub carbon_intensity_gco2_kwh: f64,
    pub power_consumption_kwh: f64,
    pub carbon_emissions_kg: f64,
    pub monthly_cost_usd: f64,
    #[serde(default)]
    pub is_current_region: bool,
    #[serde(default)]
    pub is_lowest_carbon: bool,
    #[serde(default)]
    pub is_lowest_cost: bool,
    #[serde(default)]
    pub carbon_savings_kg: f64,
    #[serde(default)]
    pub cost_savings_usd: f64,
    #[serde(default)]
    pub carbon_savings_percent: f64,
    #[serde(default)]
    pub cost_savings_percent: f64,
}

/// Human-relatable translations of the yearly carbon savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equivalencies {
    pub yearly_savings_kg: f64,
    pub car_km_saved: f64,
    pub tree_months: f64,
    pub smartphone_charges: f64,
}

/// Full result bundle for one simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub request: WorkloadRequest,
    pub current_region_result: RegionResult,
    /// All computed regions except the current one, greenest first
    pub comparison_regions: Vec<RegionResult>,
    pub best_carbon_region: RegionResult,
    pub best_cost_region: RegionResult,
    /// Weighted multi-factor pick; may differ from both best regions
    pub recommended_region: RegionResult,
    pub equivalencies: Equivalencies,
    /// Region codes excluded from the comparison for missing reference data
    pub skipped_regions: Vec<String>,
    /// Narrative report from the insight generator, passed through unmodified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights_provider: Option<String>,
}

/// Instance catalog entry for the metadata endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub instance_type: String,
    pub vcpus: u32,
    pub memory_gb: f64,
    pub idle_watts: f64,
    pub max_watts: f64,
}

/// Region catalog entry for the metadata endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionInfo {
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    pub carbon_intensity_gco2_kwh: f64,
    pub renewable_percentage: f64,
}

/// Available options for building a simulation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub instances: Vec<InstanceInfo>,
    pub regions: Vec<RegionInfo>,
    pub cloud_providers: Vec<String>,
}
