//! Simulation command

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use crate::client::{ApiClient, PriorityWeights, SimulateRequest, SimulationOutcome};
use crate::output::{
    color_savings, format_currency, format_kg, format_percent, print_success, print_warning,
    OutputFormat,
};

/// Arguments for the simulate command
pub struct SimulateArgs {
    pub provider: String,
    pub instance_type: String,
    pub region: String,
    pub count: u32,
    pub cpu: f64,
    pub hours: f64,
    pub location: Option<String>,
    pub carbon_weight: Option<f64>,
    pub price_weight: Option<f64>,
    pub latency_weight: Option<f64>,
    pub compliance_weight: Option<f64>,
}

impl SimulateArgs {
    /// Weights are only sent when at least one flag was given; the server
    /// fills in its defaults otherwise.
    fn priorities(&self) -> Option<PriorityWeights> {
        if self.carbon_weight.is_none()
            && self.price_weight.is_none()
            && self.latency_weight.is_none()
            && self.compliance_weight.is_none()
        {
            return None;
        }
        Some(PriorityWeights {
            carbon: self.carbon_weight.unwrap_or(1.0),
            price: self.price_weight.unwrap_or(0.6),
            latency: self.latency_weight.unwrap_or(0.3),
            compliance: self.compliance_weight.unwrap_or(0.2),
        })
    }
}

/// Row for the region comparison table
#[derive(Tabled, serde::Serialize)]
struct ComparisonRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Carbon")]
    carbon: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Carbon Savings")]
    carbon_savings: String,
    #[tabled(rename = "Cost Savings")]
    cost_savings: String,
}

/// Run a simulation and render the comparison
pub async fn run_simulation(
    client: &ApiClient,
    args: SimulateArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = SimulateRequest {
        cloud_provider: args.provider.clone(),
        instance_type: args.instance_type.clone(),
        instance_count: args.count,
        cpu_utilization: args.cpu,
        hours_per_month: args.hours,
        current_region: args.region.clone(),
        user_location: args.location.clone(),
        priorities: args.priorities(),
    };

    let outcome: SimulationOutcome = client.post("api/v1/simulate", &request).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Table => {
            render_outcome(&args, &outcome);
        }
    }

    Ok(())
}

fn render_outcome(args: &SimulateArgs, outcome: &SimulationOutcome) {
    let current = &outcome.current_region_result;

    println!("{}", "Workload".bold());
    println!("{}", "=".repeat(60));
    println!(
        "{} x {} at {:.0}% CPU, {:.0} h/month in {}",
        args.count,
        args.instance_type,
        args.cpu,
        args.hours,
        current.region_code.cyan()
    );
    println!(
        "Current footprint:      {} / {} per month",
        format_kg(current.carbon_emissions_kg),
        format_currency(current.monthly_cost_usd)
    );
    println!();

    println!("{}", "Region Comparison".bold());
    println!("{}", "=".repeat(60));

    let mut rows = Vec::with_capacity(outcome.comparison_regions.len() + 1);
    rows.push(comparison_row(current));
    for region in &outcome.comparison_regions {
        rows.push(comparison_row(region));
    }
    let table = tabled::Table::new(rows)
        .with(tabled::settings::Style::rounded())
        .to_string();
    println!("{}", table);
    println!(
        "{}",
        "markers: * current, ▼ lowest carbon, $ lowest cost".dimmed()
    );
    println!();

    if !outcome.skipped_regions.is_empty() {
        print_warning(&format!(
            "Skipped regions without pricing data: {}",
            outcome.skipped_regions.join(", ")
        ));
        println!();
    }

    println!("{}", "Recommendation".bold());
    println!("{}", "=".repeat(60));
    let recommended = &outcome.recommended_region;
    if recommended.is_current_region {
        print_success(&format!(
            "Stay in {} ({})",
            recommended.region_code.bold(),
            recommended.region_name
        ));
    } else {
        print_success(&format!(
            "Move to {} ({}): save {} ({}) and {} ({}) per month",
            recommended.region_code.bold(),
            recommended.region_name,
            format_kg(recommended.carbon_savings_kg).green(),
            format_percent(recommended.carbon_savings_percent),
            color_savings(
                recommended.cost_savings_usd,
                format_currency(recommended.cost_savings_usd)
            ),
            format_percent(recommended.cost_savings_percent)
        ));
    }

    let eq = &outcome.equivalencies;
    if eq.yearly_savings_kg > 0.0 {
        println!();
        println!(
            "A year of this saves {} of CO2, like taking a car off the road for {:.0} km, \
             the work of {:.0} tree-months, or {:.0} smartphone charges.",
            format_kg(eq.yearly_savings_kg).green(),
            eq.car_km_saved,
            eq.tree_months,
            eq.smartphone_charges
        );
    }

    if let Some(insights) = &outcome.insights {
        println!();
        println!("{}", "Insights".bold());
        println!("{}", "=".repeat(60));
        println!("{}", insights);
        if let Some(provider) = &outcome.insights_provider {
            println!("{}", format!("(generated by: {})", provider).dimmed());
        }
    }
}

fn comparison_row(region: &crate::client::RegionResult) -> ComparisonRow {
    let mut markers = String::new();
    if region.is_current_region {
        markers.push('*');
    }
    if region.is_lowest_carbon {
        markers.push('▼');
    }
    if region.is_lowest_cost {
        markers.push('$');
    }

    let name = if markers.is_empty() {
        region.region_code.clone()
    } else {
        format!("{} {}", region.region_code, markers)
    };

    ComparisonRow {
        region: name,
        location: format!("{}, {}", region.region_name, region.country),
        carbon: format_kg(region.carbon_emissions_kg),
        cost: format_currency(region.monthly_cost_usd),
        carbon_savings: if region.is_current_region {
            "-".to_string()
        } else {
            color_savings(
                region.carbon_savings_kg,
                format!(
                    "{} ({})",
                    format_kg(region.carbon_savings_kg),
                    format_percent(region.carbon_savings_percent)
                ),
            )
        },
        cost_savings: if region.is_current_region {
            "-".to_string()
        } else {
            color_savings(
                region.cost_savings_usd,
                format!(
                    "{} ({})",
                    format_currency(region.cost_savings_usd),
                    format_percent(region.cost_savings_percent)
                ),
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SimulateArgs {
        SimulateArgs {
            provider: "aws".to_string(),
            instance_type: "t3.micro".to_string(),
            region: "eu-central-1".to_string(),
            count: 10,
            cpu: 50.0,
            hours: 730.0,
            location: None,
            carbon_weight: None,
            price_weight: None,
            latency_weight: None,
            compliance_weight: None,
        }
    }

    #[test]
    fn test_priorities_omitted_without_weight_flags() {
        assert!(args().priorities().is_none());
    }

    #[test]
    fn test_partial_weights_fall_back_to_defaults() {
        let mut args = args();
        args.compliance_weight = Some(1.0);

        let priorities = args.priorities().unwrap();
        assert_eq!(priorities.compliance, 1.0);
        assert_eq!(priorities.carbon, 1.0);
        assert_eq!(priorities.price, 0.6);
        assert_eq!(priorities.latency, 0.3);
    }
}
