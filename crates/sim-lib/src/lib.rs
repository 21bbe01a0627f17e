//! Core simulation engine for the CarbonShift Simulator
//!
//! This crate provides the deterministic calculation pipeline:
//! - Reference catalog of instance power profiles, regions, and pricing
//! - Power/emission/cost calculation for one workload in one region
//! - Cross-region comparison with savings and best-region flags
//! - Location-aware latency/compliance scoring
//! - Weighted multi-factor region recommendation
//! - CO2 equivalency translation
//!
//! The HTTP surface and CLI live in sibling crates; everything here is
//! synchronous, side-effect-free computation over immutable reference data,
//! except for the pluggable insight generator seam.

pub mod calculator;
pub mod catalog;
pub mod comparator;
pub mod equivalency;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod insight;
pub mod locality;
pub mod models;
pub mod recommend;
pub mod simulation;

pub use catalog::{ReferenceData, StaticCatalog};
pub use error::SimulationError;
pub use insight::{InsightGenerator, TemplateInsights};
pub use locality::LocalityPolicy;
pub use models::*;
pub use simulation::Simulator;
