//! CLI command implementations

pub mod metadata;
pub mod simulate;
