//! Location resolution and latency/compliance scoring
//!
//! Free-text user locations resolve to a coarse (country, zone) geography
//! through a static lookup. Score buckets live in [`LocalityPolicy`] so the
//! policy can be tuned without touching the scoring logic. Unresolved input
//! degrades to neutral scores for every region; it is never an error.

use serde::{Deserialize, Serialize};

use crate::models::{GeoZone, RegionProfile};

/// Coarse user geography resolved from free text
#[derive(Debug, Clone, PartialEq)]
pub struct UserGeo {
    /// Present when the input named a country; continent-level input
    /// resolves to a zone only.
    pub country: Option<String>,
    pub zone: GeoZone,
}

/// Latency and compliance signals for one region, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalityScores {
    pub latency: f64,
    pub compliance: f64,
}

/// Score buckets for proximity and data-sovereignty fit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalityPolicy {
    pub same_country_latency: f64,
    pub same_zone_latency: f64,
    pub other_zone_latency: f64,
    pub same_country_compliance: f64,
    /// Same coarse zone is treated as the same legal jurisdiction bucket
    pub same_zone_compliance: f64,
    pub other_zone_compliance: f64,
    /// Applied to every region when the user location is absent/unresolved
    pub neutral: f64,
}

impl Default for LocalityPolicy {
    fn default() -> Self {
        Self {
            same_country_latency: 1.0,
            same_zone_latency: 0.7,
            other_zone_latency: 0.3,
            same_country_compliance: 1.0,
            same_zone_compliance: 1.0,
            other_zone_compliance: 0.2,
            neutral: 0.5,
        }
    }
}

impl LocalityPolicy {
    /// Scores applied when no location signal is available
    pub fn neutral_scores(&self) -> LocalityScores {
        LocalityScores {
            latency: self.neutral,
            compliance: self.neutral,
        }
    }

    /// Score one region against the (possibly unresolved) user geography
    pub fn score(&self, user: Option<&UserGeo>, region: &RegionProfile) -> LocalityScores {
        let Some(user) = user else {
            return self.neutral_scores();
        };

        let same_country = user
            .country
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(&region.country));
        let same_zone = user.zone == region.zone;

        let latency = if same_country {
            self.same_country_latency
        } else if same_zone {
            self.same_zone_latency
        } else {
            self.other_zone_latency
        };

        let compliance = if same_country {
            self.same_country_compliance
        } else if same_zone {
            self.same_zone_compliance
        } else {
            self.other_zone_compliance
        };

        LocalityScores { latency, compliance }
    }
}

/// Resolve free-text input to a coarse geography.
///
/// Returns `None` for empty or unrecognized input; callers treat that as a
/// neutral signal.
pub fn resolve_location(user_location: Option<&str>) -> Option<UserGeo> {
    let normalized = user_location?.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    use GeoZone::*;
    let country = |name: &str, zone: GeoZone| {
        Some(UserGeo {
            country: Some(name.to_string()),
            zone,
        })
    };
    let continent = |zone: GeoZone| Some(UserGeo { country: None, zone });

    match normalized.as_str() {
        "sweden" => country("Sweden", Europe),
        "ireland" => country("Ireland", Europe),
        "united kingdom" | "uk" | "great britain" | "england" => {
            country("United Kingdom", Europe)
        }
        "france" => country("France", Europe),
        "germany" | "deutschland" => country("Germany", Europe),
        "switzerland" => country("Switzerland", Europe),
        "italy" => country("Italy", Europe),
        "spain" | "netherlands" | "poland" | "norway" | "denmark" | "finland" => {
            continent(Europe)
        }
        "united states" | "united states of america" | "usa" | "us" | "america" => {
            country("United States", NorthAmerica)
        }
        "canada" => country("Canada", NorthAmerica),
        "mexico" => continent(NorthAmerica),
        "japan" => country("Japan", AsiaPacific),
        "south korea" | "korea" => country("South Korea", AsiaPacific),
        "singapore" => country("Singapore", AsiaPacific),
        "australia" => country("Australia", AsiaPacific),
        "india" => country("India", AsiaPacific),
        "china" | "indonesia" | "new zealand" | "thailand" | "vietnam" => {
            continent(AsiaPacific)
        }
        "brazil" => country("Brazil", SouthAmerica),
        "argentina" | "chile" | "colombia" => continent(SouthAmerica),
        "europe" | "eu" => continent(Europe),
        "north america" => continent(NorthAmerica),
        "asia" | "asia pacific" | "apac" | "oceania" => continent(AsiaPacific),
        "south america" | "latin america" => continent(SouthAmerica),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoZone::*;

    fn region(country: &str, zone: GeoZone) -> RegionProfile {
        RegionProfile {
            region_code: "xx-test-1".to_string(),
            region_name: "Test".to_string(),
            country: country.to_string(),
            zone,
            carbon_intensity_gco2_kwh: 100.0,
            renewable_percentage: 0.0,
        }
    }

    #[test]
    fn test_resolve_country_and_aliases() {
        let geo = resolve_location(Some("Germany")).unwrap();
        assert_eq!(geo.country.as_deref(), Some("Germany"));
        assert_eq!(geo.zone, Europe);

        let geo = resolve_location(Some("  USA  ")).unwrap();
        assert_eq!(geo.country.as_deref(), Some("United States"));

        let geo = resolve_location(Some("uk")).unwrap();
        assert_eq!(geo.country.as_deref(), Some("United Kingdom"));
    }

    #[test]
    fn test_resolve_continent_bucket() {
        let geo = resolve_location(Some("Europe")).unwrap();
        assert!(geo.country.is_none());
        assert_eq!(geo.zone, Europe);
    }

    #[test]
    fn test_unresolved_input_is_none() {
        assert!(resolve_location(None).is_none());
        assert!(resolve_location(Some("")).is_none());
        assert!(resolve_location(Some("   ")).is_none());
        assert!(resolve_location(Some("Atlantis")).is_none());
    }

    #[test]
    fn test_neutral_scores_without_location() {
        let policy = LocalityPolicy::default();
        let scores = policy.score(None, &region("Germany", Europe));
        assert_eq!(scores.latency, 0.5);
        assert_eq!(scores.compliance, 0.5);
    }

    #[test]
    fn test_same_country_beats_same_zone_beats_other() {
        let policy = LocalityPolicy::default();
        let user = resolve_location(Some("Germany")).unwrap();

        let home = policy.score(Some(&user), &region("Germany", Europe));
        let neighbor = policy.score(Some(&user), &region("Sweden", Europe));
        let far = policy.score(Some(&user), &region("Japan", AsiaPacific));

        assert!(home.latency > neighbor.latency);
        assert!(neighbor.latency > far.latency);
        assert!(home.compliance >= neighbor.compliance);
        assert!(neighbor.compliance > far.compliance);
    }

    #[test]
    fn test_continent_input_scores_whole_zone() {
        let policy = LocalityPolicy::default();
        let user = resolve_location(Some("Europe")).unwrap();

        let eu = policy.score(Some(&user), &region("France", Europe));
        assert_eq!(eu.latency, policy.same_zone_latency);
        assert_eq!(eu.compliance, policy.same_zone_compliance);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let policy = LocalityPolicy::default();
        for input in [None, Some("Germany"), Some("Asia"), Some("Atlantis")] {
            let user = resolve_location(input);
            for r in [region("Germany", Europe), region("India", AsiaPacific)] {
                let scores = policy.score(user.as_ref(), &r);
                assert!((0.0..=1.0).contains(&scores.latency));
                assert!((0.0..=1.0).contains(&scores.compliance));
            }
        }
    }
}
