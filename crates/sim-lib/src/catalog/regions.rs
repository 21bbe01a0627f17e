//! Built-in AWS region catalog with grid carbon intensity
//!
//! Intensities are annual averages (gCO2/kWh) from Electricity Maps, IEA,
//! and public carbon-intensity databases. Real-time values would require an
//! external telemetry feed, which is out of scope.

use crate::models::{GeoZone, RegionProfile};

fn region(
    region_code: &str,
    region_name: &str,
    country: &str,
    zone: GeoZone,
    carbon_intensity_gco2_kwh: f64,
    renewable_percentage: f64,
) -> RegionProfile {
    RegionProfile {
        region_code: region_code.to_string(),
        region_name: region_name.to_string(),
        country: country.to_string(),
        zone,
        carbon_intensity_gco2_kwh,
        renewable_percentage,
    }
}

pub(super) fn builtin_regions() -> Vec<RegionProfile> {
    use GeoZone::*;
    vec![
        // Europe
        region("eu-north-1", "Stockholm", "Sweden", Europe, 45.0, 75.0),
        region("eu-west-1", "Ireland", "Ireland", Europe, 296.0, 42.0),
        region("eu-west-2", "London", "United Kingdom", Europe, 233.0, 45.0),
        region("eu-west-3", "Paris", "France", Europe, 56.0, 25.0),
        region("eu-central-1", "Frankfurt", "Germany", Europe, 385.0, 52.0),
        region("eu-central-2", "Zurich", "Switzerland", Europe, 28.0, 80.0),
        region("eu-south-1", "Milan", "Italy", Europe, 315.0, 40.0),
        // North America
        region("us-east-1", "N. Virginia", "United States", NorthAmerica, 378.0, 22.0),
        region("us-east-2", "Ohio", "United States", NorthAmerica, 415.0, 15.0),
        region("us-west-1", "N. California", "United States", NorthAmerica, 210.0, 48.0),
        region("us-west-2", "Oregon", "United States", NorthAmerica, 115.0, 72.0),
        region("ca-central-1", "Montreal", "Canada", NorthAmerica, 25.0, 95.0),
        // Asia Pacific
        region("ap-northeast-1", "Tokyo", "Japan", AsiaPacific, 465.0, 22.0),
        region("ap-northeast-2", "Seoul", "South Korea", AsiaPacific, 420.0, 10.0),
        region("ap-southeast-1", "Singapore", "Singapore", AsiaPacific, 408.0, 5.0),
        region("ap-southeast-2", "Sydney", "Australia", AsiaPacific, 660.0, 32.0),
        region("ap-south-1", "Mumbai", "India", AsiaPacific, 708.0, 20.0),
        // South America
        region("sa-east-1", "São Paulo", "Brazil", SouthAmerica, 75.0, 85.0),
    ]
}
