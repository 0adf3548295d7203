// crates/flightprint-core/src/units.rs

//! # Unit Converter
//!
//! Pure CO2 mass -> equivalence-unit conversions. Every function performs
//! its floating-point operations in one fixed order, so identical input
//! gives bit-identical output.

/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.20462262185;

/// Pounds per metric ton, as used by the EPA equivalency factors.
pub const LB_PER_TONNE: f64 = 2204.62;

/// A human-relatable unit with a fixed CO2 cost per unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquivalenceUnit {
    pub name: &'static str,
    /// Metric tons of CO2 emitted per unit.
    pub tonnes_per_unit: f64,
}

/// One full smartphone charge (EPA: 8.22 x 10^-6 t CO2).
pub const SMARTPHONE_CHARGE: EquivalenceUnit = EquivalenceUnit {
    name: "smartphones charged",
    tonnes_per_unit: 8.22e-6,
};

#[inline]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

impl EquivalenceUnit {
    /// Pounds of CO2 per unit.
    #[inline]
    pub fn lb_per_unit(&self) -> f64 {
        self.tonnes_per_unit * LB_PER_TONNE
    }

    /// Whole units for a mass in pounds, rounded to nearest.
    ///
    /// Negative or non-finite input saturates to 0; callers reject those
    /// masses before converting.
    pub fn count_from_lb(&self, lb: f64) -> u64 {
        (lb / self.lb_per_unit()).round() as u64
    }

    pub fn count_from_kg(&self, kg: f64) -> u64 {
        self.count_from_lb(kg_to_lb(kg))
    }
}

/// Smartphone charges with the same CO2 mass as `kg`.
///
/// ```rust
/// use flightprint_core::units::smartphones_charged;
///
/// assert_eq!(smartphones_charged(1.0), 122);
/// ```
pub fn smartphones_charged(kg: f64) -> u64 {
    SMARTPHONE_CHARGE.count_from_kg(kg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kilograms_to_pounds() {
        assert_relative_eq!(kg_to_lb(108.33), 238.826_768_625, epsilon = 1e-6);
        assert_eq!(kg_to_lb(0.0), 0.0);
    }

    #[test]
    fn smartphone_factor_in_pounds() {
        assert_relative_eq!(SMARTPHONE_CHARGE.lb_per_unit(), 0.018_121_976_4, epsilon = 1e-12);
    }

    #[test]
    fn known_footprints() {
        assert_eq!(smartphones_charged(108.33), 13_179);
        assert_eq!(smartphones_charged(1000.0), 121_655);
        assert_eq!(smartphones_charged(0.0), 0);
    }

    #[test]
    fn conversion_is_bit_reproducible() {
        let inputs = [0.1, 3.7, 108.33, 2_500.125, 1e7];
        for kg in inputs {
            let first = smartphones_charged(kg);
            for _ in 0..100 {
                assert_eq!(smartphones_charged(kg), first);
            }
            assert_eq!(kg_to_lb(kg).to_bits(), kg_to_lb(kg).to_bits());
        }
    }

    #[test]
    fn pounds_path_matches_kilogram_path() {
        let lb = kg_to_lb(42.0);
        assert_eq!(SMARTPHONE_CHARGE.count_from_lb(lb), SMARTPHONE_CHARGE.count_from_kg(42.0));
    }
}
