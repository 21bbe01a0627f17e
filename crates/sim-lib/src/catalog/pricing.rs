//! Built-in AWS on-demand pricing tables
//!
//! Hourly Linux on-demand rates in USD, modeled as a us-east-1 base price
//! times a regional multiplier. Regions or instance types absent from these
//! tables have no price entry; callers must treat that as missing data
//! rather than assuming a default premium.

use std::collections::HashMap;

pub(super) fn base_prices() -> HashMap<&'static str, f64> {
    HashMap::from([
        ("t3.micro", 0.0104),
        ("t3.small", 0.0208),
        ("t3.medium", 0.0416),
        ("t3.large", 0.0832),
        ("t3.xlarge", 0.1664),
        ("m5.large", 0.096),
        ("m5.xlarge", 0.192),
        ("m5.2xlarge", 0.384),
        ("m5.4xlarge", 0.768),
        ("c5.large", 0.085),
        ("c5.xlarge", 0.170),
        ("c5.2xlarge", 0.340),
        ("r5.large", 0.126),
        ("r5.xlarge", 0.252),
        ("r5.2xlarge", 0.504),
    ])
}

pub(super) fn region_multipliers() -> HashMap<&'static str, f64> {
    HashMap::from([
        // North America
        ("us-east-1", 1.00),
        ("us-east-2", 1.00),
        ("us-west-1", 1.10),
        ("us-west-2", 1.00),
        ("ca-central-1", 1.05),
        // Europe
        ("eu-west-1", 1.08),
        ("eu-west-2", 1.10),
        ("eu-west-3", 1.12),
        ("eu-central-1", 1.10),
        ("eu-central-2", 1.18),
        ("eu-north-1", 1.05),
        ("eu-south-1", 1.12),
        // Asia Pacific
        ("ap-northeast-1", 1.20),
        ("ap-northeast-2", 1.18),
        ("ap-southeast-1", 1.12),
        ("ap-southeast-2", 1.15),
        ("ap-south-1", 1.05),
        // South America
        ("sa-east-1", 1.45),
    ])
}
