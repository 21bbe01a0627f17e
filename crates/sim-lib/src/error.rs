//! Error taxonomy for the simulation engine

use thiserror::Error;

/// Errors that abort a simulation.
///
/// Partial data on comparison regions is not an error: those regions are
/// skipped and reported in the outcome instead. Unresolvable user locations
/// degrade to neutral locality scores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Malformed or out-of-range request field, rejected before computation
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Instance type not present in the power profile catalog
    #[error("unknown instance type: {0}")]
    UnknownInstanceType(String),

    /// Region code not present in the region catalog
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// No price entry for the baseline (provider, instance, region) tuple
    #[error("no price entry for {instance_type} ({provider}) in {region_code}")]
    MissingPrice {
        provider: String,
        instance_type: String,
        region_code: String,
    },
}

impl SimulationError {
    /// True for errors caused by identifiers the catalog does not know
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SimulationError::UnknownInstanceType(_)
                | SimulationError::UnknownRegion(_)
                | SimulationError::MissingPrice { .. }
        )
    }
}
