//! Read-only reference data: instance power profiles, regions, pricing
//!
//! The catalog is injected behind the [`ReferenceData`] trait so tests can
//! substitute fixture data. [`StaticCatalog`] carries the built-in tables,
//! loaded once per process.

mod instances;
mod pricing;
mod regions;

use crate::models::{InstancePowerProfile, RegionProfile};
use std::collections::HashMap;

/// Read-only provider of instance, region, and pricing reference data
pub trait ReferenceData: Send + Sync {
    /// All known instance power profiles
    fn instances(&self) -> &[InstancePowerProfile];

    /// All known regions
    fn regions(&self) -> &[RegionProfile];

    fn instance_profile(&self, instance_type: &str) -> Option<&InstancePowerProfile> {
        self.instances()
            .iter()
            .find(|p| p.instance_type == instance_type)
    }

    fn region(&self, region_code: &str) -> Option<&RegionProfile> {
        self.regions().iter().find(|r| r.region_code == region_code)
    }

    /// Hourly on-demand price in USD, or `None` when no entry exists.
    ///
    /// A missing entry is an error condition for the caller, never a
    /// silent zero.
    fn hourly_price(&self, provider: &str, instance_type: &str, region_code: &str) -> Option<f64>;

    /// Providers the catalog carries pricing for
    fn cloud_providers(&self) -> Vec<String>;
}

/// Built-in static catalog.
///
/// Instance power figures are based on SPECpower and cloud carbon footprint
/// research; carbon intensities are annual grid averages from public
/// carbon-intensity databases. Prices are approximate on-demand Linux rates,
/// modeled as a us-east-1 base price times a regional multiplier.
pub struct StaticCatalog {
    instances: Vec<InstancePowerProfile>,
    regions: Vec<RegionProfile>,
    base_prices_usd: HashMap<&'static str, f64>,
    region_multipliers: HashMap<&'static str, f64>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            instances: instances::builtin_instances(),
            regions: regions::builtin_regions(),
            base_prices_usd: pricing::base_prices(),
            region_multipliers: pricing::region_multipliers(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceData for StaticCatalog {
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
        let base = self.base_prices_usd.get(instance_type)?;
        let multiplier = self.region_multipliers.get(region_code)?;
        // 4 decimal places, matching published hourly rates
        Some((base * multiplier * 10_000.0).round() / 10_000.0)
    }

    fn cloud_providers(&self) -> Vec<String> {
        vec!["aws".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_consistent() {
        let catalog = StaticCatalog::new();

        assert!(!catalog.instances().is_empty());
        assert!(!catalog.regions().is_empty());

        for profile in catalog.instances() {
            assert!(
                profile.idle_watts >= 0.0 && profile.idle_watts <= profile.max_watts,
                "bad power profile for {}",
                profile.instance_type
            );
        }
        for region in catalog.regions() {
            assert!(
                region.carbon_intensity_gco2_kwh >= 0.0,
                "negative intensity for {}",
                region.region_code
            );
        }
    }

    #[test]
    fn test_every_builtin_region_has_pricing_for_every_instance() {
        let catalog = StaticCatalog::new();
        for region in catalog.regions() {
            for profile in catalog.instances() {
                let price =
                    catalog.hourly_price("aws", &profile.instance_type, &region.region_code);
                assert!(
                    price.is_some(),
                    "missing price for {} in {}",
                    profile.instance_type,
                    region.region_code
                );
                assert!(price.unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_lookup_by_key() {
        let catalog = StaticCatalog::new();

        let micro = catalog.instance_profile("t3.micro").unwrap();
        assert_eq!(micro.idle_watts, 3.5);
        assert_eq!(micro.max_watts, 18.0);

        let frankfurt = catalog.region("eu-central-1").unwrap();
        assert_eq!(frankfurt.carbon_intensity_gco2_kwh, 385.0);
        assert_eq!(frankfurt.country, "Germany");

        assert!(catalog.instance_profile("z9.mega").is_none());
        assert!(catalog.region("mars-north-1").is_none());
    }

    #[test]
    fn test_unknown_provider_has_no_prices() {
        let catalog = StaticCatalog::new();
        assert!(catalog.hourly_price("gcp", "t3.micro", "us-east-1").is_none());
        // Provider matching is case-insensitive
        assert!(catalog.hourly_price("AWS", "t3.micro", "us-east-1").is_some());
    }

    #[test]
    fn test_base_region_price_is_unscaled() {
        let catalog = StaticCatalog::new();
        let price = catalog.hourly_price("aws", "t3.micro", "us-east-1").unwrap();
        assert!((price - 0.0104).abs() < 1e-9);
    }
}
