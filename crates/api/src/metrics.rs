//! Prometheus metrics for the simulation service

use prometheus::{register_histogram, register_int_counter, Histogram, IntCounter};
use std::sync::OnceLock;

/// Histogram buckets for simulation latency (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once per process)
static GLOBAL_METRICS: OnceLock<ApiMetricsInner> = OnceLock::new();

struct ApiMetricsInner {
    simulation_latency_seconds: Histogram,
    simulations_total: IntCounter,
    simulation_errors_total: IntCounter,
    regions_skipped_total: IntCounter,
    insight_failures_total: IntCounter,
}

impl ApiMetricsInner {
    fn new() -> Self {
        Self {
            simulation_latency_seconds: register_histogram!(
                "carbonshift_simulation_latency_seconds",
                "Time spent computing one region comparison",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register simulation_latency_seconds"),

            simulations_total: register_int_counter!(
                "carbonshift_simulations_total",
                "Total number of simulations run"
            )
            .expect("Failed to register simulations_total"),

            simulation_errors_total: register_int_counter!(
                "carbonshift_simulation_errors_total",
                "Total number of simulations that failed"
            )
            .expect("Failed to register simulation_errors_total"),

            regions_skipped_total: register_int_counter!(
                "carbonshift_regions_skipped_total",
                "Comparison regions excluded for missing reference data"
            )
            .expect("Failed to register regions_skipped_total"),

            insight_failures_total: register_int_counter!(
                "carbonshift_insight_failures_total",
                "Insight generation calls that failed or timed out"
            )
            .expect("Failed to register insight_failures_total"),
        }
    }
}

/// Lightweight handle to the global metrics; clones share the same counters
#[derive(Clone)]
pub struct ApiMetrics {
    _private: (),
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiMetrics {
    /// Every constructor registers the global metrics, so a handle can
    /// never observe an uninitialized registry.
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ApiMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ApiMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    pub fn observe_simulation_latency(&self, duration_secs: f64) {
        self.inner()
            .simulation_latency_seconds
            .observe(duration_secs);
    }

    pub fn record_simulation(&self, skipped_regions: usize) {
        self.inner().simulations_total.inc();
        self.inner()
            .regions_skipped_total
            .inc_by(skipped_regions as u64);
    }

    pub fn record_simulation_error(&self) {
        self.inner().simulation_errors_total.inc();
    }

    pub fn record_insight_failure(&self) {
        self.inner().insight_failures_total.inc();
    }
}
