//! Catalog browsing commands

use anyhow::Result;
use tabled::Tabled;

use crate::client::{ApiClient, MetadataResponse};
use crate::output::{color_intensity, print_table, OutputFormat};

/// Row for the instance catalog table
#[derive(Tabled, serde::Serialize)]
struct InstanceRow {
    #[tabled(rename = "Instance Type")]
    instance_type: String,
    #[tabled(rename = "vCPUs")]
    vcpus: u32,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "Idle Power")]
    idle_watts: String,
    #[tabled(rename = "Max Power")]
    max_watts: String,
}

/// Row for the region catalog table
#[derive(Tabled, serde::Serialize)]
struct RegionRow {
    #[tabled(rename = "Region")]
    region_code: String,
    #[tabled(rename = "Name")]
    region_name: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Carbon Intensity")]
    carbon_intensity: String,
    #[tabled(rename = "Renewables")]
    renewables: String,
}

/// List available instance types
pub async fn list_instances(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let metadata: MetadataResponse = client.get("api/v1/metadata").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&metadata.instances)?);
        }
        OutputFormat::Table => {
            let rows: Vec<InstanceRow> = metadata
                .instances
                .iter()
                .map(|i| InstanceRow {
                    instance_type: i.instance_type.clone(),
                    vcpus: i.vcpus,
                    memory: format!("{:.0} GB", i.memory_gb),
                    idle_watts: format!("{:.1} W", i.idle_watts),
                    max_watts: format!("{:.1} W", i.max_watts),
                })
                .collect();
            print_table(&rows, format);
        }
    }

    Ok(())
}

/// List available regions
pub async fn list_regions(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let metadata: MetadataResponse = client.get("api/v1/metadata").await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&metadata.regions)?);
        }
        OutputFormat::Table => {
            let rows: Vec<RegionRow> = metadata
                .regions
                .iter()
                .map(|r| RegionRow {
                    region_code: r.region_code.clone(),
                    region_name: r.region_name.clone(),
                    country: r.country.clone(),
                    carbon_intensity: color_intensity(r.carbon_intensity_gco2_kwh),
                    renewables: format!("{:.0}%", r.renewable_percentage),
                })
                .collect();
            print_table(&rows, format);
        }
    }

    Ok(())
}
