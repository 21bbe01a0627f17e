//! Built-in AWS instance power profiles
//!
//! Idle/max watt figures follow SPECpower measurements and cloud carbon
//! footprint research.

use crate::models::InstancePowerProfile;

fn profile(
    instance_type: &str,
    vcpus: u32,
    memory_gb: f64,
    idle_watts: f64,
    max_watts: f64,
) -> InstancePowerProfile {
    InstancePowerProfile {
        instance_type: instance_type.to_string(),
        vcpus,
        memory_gb,
        idle_watts,
        max_watts,
    }
}

pub(super) fn builtin_instances() -> Vec<InstancePowerProfile> {
    vec![
        // T3 series (burstable)
        profile("t3.micro", 2, 1.0, 3.5, 18.0),
        profile("t3.small", 2, 2.0, 4.5, 22.0),
        profile("t3.medium", 2, 4.0, 6.0, 28.0),
        profile("t3.large", 2, 8.0, 8.0, 35.0),
        profile("t3.xlarge", 4, 16.0, 12.0, 55.0),
        // M5 series (general purpose)
        profile("m5.large", 2, 8.0, 12.0, 45.0),
        profile("m5.xlarge", 4, 16.0, 18.0, 75.0),
        profile("m5.2xlarge", 8, 32.0, 30.0, 130.0),
        profile("m5.4xlarge", 16, 64.0, 55.0, 240.0),
        // C5 series (compute optimized)
        profile("c5.large", 2, 4.0, 10.0, 50.0),
        profile("c5.xlarge", 4, 8.0, 16.0, 85.0),
        profile("c5.2xlarge", 8, 16.0, 28.0, 150.0),
        // R5 series (memory optimized)
        profile("r5.large", 2, 16.0, 14.0, 52.0),
        profile("r5.xlarge", 4, 32.0, 22.0, 88.0),
        profile("r5.2xlarge", 8, 64.0, 38.0, 155.0),
    ]
}
