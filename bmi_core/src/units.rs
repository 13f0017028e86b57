//! Conversion from entered units to canonical meters and kilograms.

use crate::UnitSystem;

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Convert a height/weight pair to `(height_m, weight_kg)`
///
/// Negative values pass through unchanged; range checks belong to the
/// input layer.
pub fn convert(height: f64, weight: f64, unit_system: UnitSystem) -> (f64, f64) {
    match unit_system {
        UnitSystem::Metric => (height / CM_PER_M, weight),
        UnitSystem::Imperial => (height * M_PER_INCH, weight * KG_PER_LB),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_metric_conversion() {
        assert_eq!(convert(175.0, 70.0, UnitSystem::Metric), (1.75, 70.0));
    }

    #[test]
    fn test_imperial_conversion() {
        let (h, w) = convert(68.0, 150.0, UnitSystem::Imperial);
        assert!(approx(h, 1.7272), "height was {}", h);
        assert!(approx(w, 68.0388), "weight was {}", w);
    }

    #[test]
    fn test_negative_values_not_rejected() {
        let (h, w) = convert(-10.0, -5.0, UnitSystem::Metric);
        assert_eq!(h, -0.1);
        assert_eq!(w, -5.0);
    }
}
