//! API client for communicating with the CarbonShift API

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

/// API client for the CarbonShift API
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }
}

// API request/response types

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub carbon: f64,
    pub price: f64,
    pub latency: f64,
    pub compliance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub cloud_provider: String,
    pub instance_type: String,
    pub instance_count: u32,
    pub cpu_utilization: f64,
    pub hours_per_month: f64,
    pub current_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priorities: Option<PriorityWeights>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionResult {
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    pub carbon_intensity_gco2_kwh: f64,
    pub power_consumption_kwh: f64,
    pub carbon_emissions_kg: f64,
    pub monthly_cost_usd: f64,
    pub is_current_region: bool,
    pub is_lowest_carbon: bool,
    pub is_lowest_cost: bool,
    pub carbon_savings_kg: f64,
    pub cost_savings_usd: f64,
    pub carbon_savings_percent: f64,
    pub cost_savings_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equivalencies {
    pub yearly_savings_kg: f64,
    pub car_km_saved: f64,
    pub tree_months: f64,
    pub smartphone_charges: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub current_region_result: RegionResult,
    pub comparison_regions: Vec<RegionResult>,
    pub best_carbon_region: RegionResult,
    pub best_cost_region: RegionResult,
    pub recommended_region: RegionResult,
    pub equivalencies: Equivalencies,
    #[serde(default)]
    pub skipped_regions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights_provider: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub instance_type: String,
    pub vcpus: u32,
    pub memory_gb: f64,
    pub idle_watts: f64,
    pub max_watts: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionInfo {
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    pub carbon_intensity_gco2_kwh: f64,
    pub renewable_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub instances: Vec<InstanceInfo>,
    pub regions: Vec<RegionInfo>,
    pub cloud_providers: Vec<String>,
}
