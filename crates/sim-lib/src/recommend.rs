//! Weighted multi-factor region recommendation
//!
//! Combines carbon and cost benefit (min-max rescaled across the comparison
//! set) with latency and compliance signals under the user's priority
//! weights. The composite scores are ephemeral; only the picked region
//! leaves this module.

use tracing::debug;

use crate::locality::LocalityScores;
use crate::models::{PriorityWeights, RegionResult};

/// Ephemeral per-region composite score
#[derive(Debug, Clone, Copy)]
struct RecommendationScore {
    index: usize,
    score: f64,
}

/// Pick the recommended region.
///
/// `locality` is parallel to `results`. Returns the index into `results` of
/// the region with the maximum composite score; ties prefer lower
/// `carbon_emissions_kg`, then lexicographic `region_code`.
pub fn recommend_region(
    results: &[RegionResult],
    locality: &[LocalityScores],
    weights: &PriorityWeights,
) -> usize {
    debug_assert_eq!(results.len(), locality.len());

    let carbon_benefit = min_max_rescale(results, |r| r.carbon_savings_kg);
    let cost_benefit = min_max_rescale(results, |r| r.cost_savings_usd);

    let mut best: Option<RecommendationScore> = None;
    for (index, result) in results.iter().enumerate() {
        let score = weights.carbon * carbon_benefit[index]
            + weights.price * cost_benefit[index]
            + weights.latency * locality[index].latency
            + weights.compliance * locality[index].compliance;

        debug!(
            region = %result.region_code,
            score,
            carbon_benefit = carbon_benefit[index],
            cost_benefit = cost_benefit[index],
            "scored region"
        );

        let candidate = RecommendationScore { index, score };
        best = Some(match best {
            None => candidate,
            Some(current) if prefer(results, candidate, current) => candidate,
            Some(current) => current,
        });
    }

    best.expect("result set is never empty").index
}

/// True when `a` beats `b`: higher score, then lower carbon, then region code
fn prefer(results: &[RegionResult], a: RecommendationScore, b: RecommendationScore) -> bool {
    if a.score != b.score {
        return a.score > b.score;
    }
    let (ra, rb) = (&results[a.index], &results[b.index]);
    if ra.carbon_emissions_kg != rb.carbon_emissions_kg {
        return ra.carbon_emissions_kg < rb.carbon_emissions_kg;
    }
    ra.region_code < rb.region_code
}

/// Rescale a savings metric to [0, 1]: best observed -> 1, worst -> 0.
///
/// A degenerate set where every region is equal scores 0.5 across the board
/// so the term neither rewards nor punishes any region.
fn min_max_rescale<F>(results: &[RegionResult], metric: F) -> Vec<f64>
where
    F: Fn(&RegionResult) -> f64,
{
    let min = results.iter().map(&metric).fold(f64::INFINITY, f64::min);
    let max = results
        .iter()
        .map(&metric)
        .fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![0.5; results.len()];
    }
    results
        .iter()
        .map(|r| (metric(r) - min) / (max - min))
        .collect()
}
