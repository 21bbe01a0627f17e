//! Test fixture catalog
//!
//! A small in-memory [`ReferenceData`] implementation so tests can shape the
//! region set, intensities, and price coverage per scenario.

use crate::catalog::ReferenceData;
use crate::models::{GeoZone, InstancePowerProfile, RegionProfile};
use std::collections::HashMap;

pub(crate) struct FixtureCatalog {
    instances: Vec<InstancePowerProfile>,
    regions: Vec<RegionProfile>,
    prices: HashMap<(String, String), f64>,
}

impl FixtureCatalog {
    pub(crate) fn new() -> Self {
        Self {
            instances: vec![InstancePowerProfile {
                instance_type: "t3.micro".to_string(),
                vcpus: 2,
                memory_gb: 1.0,
                idle_watts: 3.5,
                max_watts: 18.0,
            }],
            regions: Vec::new(),
            prices: HashMap::new(),
        }
    }

    /// Add a region with a price entry
    pub(crate) fn with_region(
        mut self,
        code: &str,
        country: &str,
        zone: GeoZone,
        intensity: f64,
        hourly_price: f64,
    ) -> Self {
        self = self.with_unpriced_region(code, country, zone, intensity);
        self.prices
            .insert(("t3.micro".to_string(), code.to_string()), hourly_price);
        self
    }

    /// Add a region the catalog has no price entry for
    pub(crate) fn with_unpriced_region(
        mut self,
        code: &str,
        country: &str,
        zone: GeoZone,
        intensity: f64,
    ) -> Self {
        self.regions.push(RegionProfile {
            region_code: code.to_string(),
            region_name: code.to_string(),
            country: country.to_string(),
            zone,
            carbon_intensity_gco2_kwh: intensity,
            renewable_percentage: 0.0,
        });
        self
    }
}

impl ReferenceData for FixtureCatalog {
    fn instances(&self) -> &[InstancePowerProfile] {
        &self.instances
    }

    fn regions(&self) -> &[RegionProfile] {
        &self.regions
    }

    fn hourly_price(&self, provider: &str, instance_type: &str, region_code: &str) -> Option<f64> {
        if !provider.eq_ignore_ascii_case("aws") {
            return None;
        }
        self.prices
            .get(&(instance_type.to_string(), region_code.to_string()))
            .copied()
    }

    fn cloud_providers(&self) -> Vec<String> {
        vec!["aws".to_string()]
    }
}
