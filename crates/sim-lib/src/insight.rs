//! Narrative insight generation seam
//!
//! The core computes numbers; turning them into a readable sustainability
//! report is delegated to an [`InsightGenerator`]. The built-in
//! [`TemplateInsights`] produces a deterministic markdown report; external
//! (LLM-backed) generators plug in behind the same trait. Callers own the
//! timeout and degrade to a null insight on failure.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::SimulationOutcome;

/// Insight generation failure; never fatal for the simulation response
#[derive(Debug, Clone, Error)]
#[error("insight generation failed: {0}")]
pub struct InsightError(pub String);

/// Produces a narrative report from a computed simulation outcome.
///
/// The returned string is passed through to the caller unmodified.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Short provider name surfaced in the response, e.g. "template"
    fn provider(&self) -> &'static str;

    async fn generate(&self, outcome: &SimulationOutcome) -> Result<String, InsightError>;
}

/// Deterministic template-based report generator
#[derive(Debug, Clone, Default)]
pub struct TemplateInsights;

#[async_trait]
impl InsightGenerator for TemplateInsights {
    fn provider(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, outcome: &SimulationOutcome) -> Result<String, InsightError> {
        Ok(render_report(outcome))
    }
}

fn render_report(outcome: &SimulationOutcome) -> String {
    let request = &outcome.request;
    let current = &outcome.current_region_result;
    let recommended = &outcome.recommended_region;
    let best_cost = &outcome.best_cost_region;
    let equivalencies = &outcome.equivalencies;

    let staying = recommended.region_code == current.region_code;

    let mut report = String::from("## Sustainability Analysis\n\n");
    if staying {
        report.push_str(&format!(
            "Your current deployment in **{}** ({}) is already the best fit for \
             your priorities. The **{}x {}** workload emits approximately \
             **{} kg CO2 per month**.\n",
            current.region_name,
            current.country,
            request.instance_count,
            request.instance_type,
            current.carbon_emissions_kg,
        ));
    } else {
        report.push_str(&format!(
            "Your **{}x {}** workload in **{}** ({}) produces approximately \
             **{} kg CO2 per month**. Migrating to **{}** ({}) would bring that \
             down to **{} kg CO2 per month**, a **{}%** reduction.\n",
            request.instance_count,
            request.instance_type,
            current.region_name,
            current.country,
            current.carbon_emissions_kg,
            recommended.region_name,
            recommended.country,
            recommended.carbon_emissions_kg,
            recommended.carbon_savings_percent,
        ));
    }

    if equivalencies.yearly_savings_kg > 0.0 {
        report.push_str(&format!(
            "\n### Environmental Impact\n\n\
             Over a year this saves approximately **{} kg of CO2**:\n\
             - equivalent to avoiding **{} km** of car travel\n\
             - equal to **{} tree-months** of CO2 absorption\n\
             - the same as **{}** smartphone charges\n",
            equivalencies.yearly_savings_kg,
            equivalencies.car_km_saved,
            equivalencies.tree_months,
            equivalencies.smartphone_charges,
        ));
    } else {
        report.push_str(
            "\n### Environmental Impact\n\n\
             Your current region is already optimized for low carbon emissions.\n",
        );
    }

    if best_cost.cost_savings_usd > 0.0 {
        report.push_str(&format!(
            "\n### Cost\n\n\
             The most cost-effective region is **{}** ({}) at **${}/month**, \
             saving **${}/month**.\n",
            best_cost.region_name,
            best_cost.country,
            best_cost.monthly_cost_usd,
            best_cost.cost_savings_usd,
        ));
    } else {
        report.push_str(&format!(
            "\n### Cost\n\n\
             Your current region offers competitive pricing at **${}/month**.\n",
            current.monthly_cost_usd,
        ));
    }

    report.push_str("\n### Recommendation\n\n");
    if staying {
        report.push_str(
            "**Stay in your current region.** It already balances carbon, cost, \
             latency, and compliance for your stated priorities.\n",
        );
    } else if recommended.carbon_savings_percent > 50.0 {
        report.push_str(&format!(
            "**Strongly recommended:** migrate to **{}**. A {}% carbon reduction \
             is a high-impact sustainability win.\n",
            recommended.region_name, recommended.carbon_savings_percent,
        ));
    } else {
        report.push_str(&format!(
            "**Consider migrating** to **{}**; it offers the best overall \
             trade-off for your priorities.\n",
            recommended.region_name,
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::models::WorkloadRequest;
    use crate::simulation::Simulator;
    use std::sync::Arc;

    fn outcome(current_region: &str) -> SimulationOutcome {
        let simulator = Simulator::new(Arc::new(StaticCatalog::new()));
        simulator
            .run(&WorkloadRequest {
                cloud_provider: "aws".to_string(),
                instance_type: "t3.micro".to_string(),
                instance_count: 10,
                cpu_utilization: 50.0,
                hours_per_month: 730.0,
                current_region: current_region.to_string(),
                user_location: None,
                priorities: None,
            })
            .unwrap()
    }

    #[tokio::test]
    async fn test_migration_report_names_both_regions() {
        let outcome = outcome("eu-central-1");
        let report = TemplateInsights.generate(&outcome).await.unwrap();

        assert!(report.contains("Frankfurt"));
        assert!(report.contains(&outcome.recommended_region.region_name));
        assert!(report.contains("kg CO2 per month"));
        assert!(report.contains("### Recommendation"));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(TemplateInsights.provider(), "template");
    }

    #[tokio::test]
    async fn test_report_is_deterministic() {
        let outcome = outcome("eu-central-1");
        let first = TemplateInsights.generate(&outcome).await.unwrap();
        let second = TemplateInsights.generate(&outcome).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_stay_put_report_when_already_recommended() {
        // Montreal has the cleanest grid; defaults keep the workload there
        let outcome = outcome("ca-central-1");
        assert_eq!(outcome.recommended_region.region_code, "ca-central-1");

        let report = TemplateInsights.generate(&outcome).await.unwrap();
        assert!(report.contains("Stay in your current region"));
        assert!(report.contains("already optimized"));
    }
}
