//! CO2 equivalency translation
//!
//! Converts yearly carbon savings into relatable physical-world units.
//! The factors are deliberately stable constants: they feed user-facing
//! claims and must not drift between versions.

use crate::calculator::round1;
use crate::models::Equivalencies;

/// Kilometers of average-car driving per kg of CO2
pub const CAR_KM_PER_KG: f64 = 4.0;

/// Tree-months of CO2 absorption per kg (one tree absorbs ~1.2 kg/month)
pub const TREE_MONTHS_PER_KG: f64 = 0.83;

/// Smartphone charges per kg of CO2
pub const SMARTPHONE_CHARGES_PER_KG: f64 = 120.0;

/// Translate monthly carbon savings into yearly equivalencies.
///
/// `monthly_savings_kg` is the current region's emissions minus the
/// recommended region's. Negative savings (the recommendation emits more)
/// clamp to zero so no negative human-facing figures escape.
pub fn equivalencies_for(monthly_savings_kg: f64) -> Equivalencies {
    let yearly_savings_kg = (monthly_savings_kg * 12.0).max(0.0);

    Equivalencies {
        yearly_savings_kg: round1(yearly_savings_kg),
        car_km_saved: (yearly_savings_kg * CAR_KM_PER_KG).round(),
        tree_months: (yearly_savings_kg * TREE_MONTHS_PER_KG).round(),
        smartphone_charges: (yearly_savings_kg * SMARTPHONE_CHARGES_PER_KG).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scaling() {
        let equiv = equivalencies_for(26.68);
        // 26.68 kg/month * 12 = 320.16 kg/year
        assert_eq!(equiv.yearly_savings_kg, 320.2);
        assert_eq!(equiv.car_km_saved, (320.16f64 * 4.0).round());
        assert_eq!(equiv.tree_months, (320.16f64 * 0.83).round());
        assert_eq!(equiv.smartphone_charges, (320.16f64 * 120.0).round());
    }

    #[test]
    fn test_negative_savings_clamp_to_zero() {
        let equiv = equivalencies_for(-10.0);
        assert_eq!(equiv.yearly_savings_kg, 0.0);
        assert_eq!(equiv.car_km_saved, 0.0);
        assert_eq!(equiv.tree_months, 0.0);
        assert_eq!(equiv.smartphone_charges, 0.0);
    }

    #[test]
    fn test_zero_savings_give_zero_equivalencies() {
        let equiv = equivalencies_for(0.0);
        assert_eq!(equiv.yearly_savings_kg, 0.0);
        assert_eq!(equiv.smartphone_charges, 0.0);
    }
}
