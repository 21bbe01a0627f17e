//! CarbonShift Simulator CLI
//!
//! A command-line tool for running carbon/cost simulations against the
//! CarbonShift API and browsing the instance and region catalogs.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{metadata, simulate};

/// CarbonShift Simulator CLI
#[derive(Parser)]
#[command(name = "cshift")]
#[command(author, version, about = "CLI for the CarbonShift Simulator", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via CSHIFT_API_URL env var)
    #[arg(long, env = "CSHIFT_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a workload's emissions and cost across regions
    Simulate {
        /// Cloud provider the workload runs on
        #[arg(long, default_value = "aws")]
        provider: String,

        /// Instance type to simulate (e.g. t3.micro)
        #[arg(long, short, default_value = "t3.micro")]
        instance_type: String,

        /// Region the workload currently runs in
        #[arg(long, short, default_value = "us-east-1")]
        region: String,

        /// Number of instances
        #[arg(long, short, default_value_t = 1)]
        count: u32,

        /// Average CPU utilization percentage (0-100)
        #[arg(long, default_value_t = 50.0)]
        cpu: f64,

        /// Runtime hours per month (1-744)
        #[arg(long, default_value_t = 730.0)]
        hours: f64,

        /// Where the workload's users are (country or continent)
        #[arg(long, short)]
        location: Option<String>,

        /// Weight for carbon reduction (0-1)
        #[arg(long)]
        carbon_weight: Option<f64>,

        /// Weight for cost reduction (0-1)
        #[arg(long)]
        price_weight: Option<f64>,

        /// Weight for user proximity (0-1)
        #[arg(long)]
        latency_weight: Option<f64>,

        /// Weight for data residency (0-1)
        #[arg(long)]
        compliance_weight: Option<f64>,
    },

    /// Browse the reference catalogs
    #[command(subcommand)]
    Metadata(MetadataCommands),
}

#[derive(Subcommand)]
pub enum MetadataCommands {
    /// List available instance types
    Instances,

    /// List available regions
    Regions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = client::ApiClient::new(&cli.api_url)?;

    match cli.command {
        Commands::Simulate {
            provider,
            instance_type,
            region,
            count,
            cpu,
            hours,
            location,
            carbon_weight,
            price_weight,
            latency_weight,
            compliance_weight,
        } => {
            let args = simulate::SimulateArgs {
                provider,
                instance_type,
                region,
                count,
                cpu,
                hours,
                location,
                carbon_weight,
                price_weight,
                latency_weight,
                compliance_weight,
            };
            simulate::run_simulation(&client, args, cli.format).await?;
        }
        Commands::Metadata(metadata_cmd) => match metadata_cmd {
            MetadataCommands::Instances => {
                metadata::list_instances(&client, cli.format).await?;
            }
            MetadataCommands::Regions => {
                metadata::list_regions(&client, cli.format).await?;
            }
        },
    }

    Ok(())
}
