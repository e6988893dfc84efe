//! Unit conversion through each measurement type's base unit.

use crate::enums::Unit;

/// Convert a quantity to the base unit of its measurement type
pub fn to_base(quantity: f64, unit: Unit) -> f64 {
    quantity * unit.to_base_factor()
}

/// Convert a quantity between two units of the same measurement type.
/// Returns `None` when the units belong to different types.
pub fn convert(quantity: f64, from: Unit, to: Unit) -> Option<f64> {
    if from.measurement_type() != to.measurement_type() {
        return None;
    }
    Some(to_base(quantity, from) / to.to_base_factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("conversion should succeed");
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn converts_within_a_type() {
        assert_close(convert(2.0, Unit::Metre, Unit::Centimetre), 200.0);
        assert_close(convert(1.0, Unit::Kilometre, Unit::Metre), 1000.0);
        assert_close(convert(90.0, Unit::Minute, Unit::Hour), 1.5);
        assert_close(convert(500.0, Unit::Gram, Unit::Kilogram), 0.5);
        assert_close(convert(1.0, Unit::Litre, Unit::Millilitre), 1000.0);
    }

    #[test]
    fn converts_imperial_factors() {
        assert_close(convert(1.0, Unit::Inch, Unit::Metre), 0.0254);
        assert_close(convert(1.0, Unit::Pound, Unit::Kilogram), 0.45359237);
    }

    #[test]
    fn rejects_cross_type_conversion() {
        assert_eq!(convert(1.0, Unit::Metre, Unit::Second), None);
        assert_eq!(convert(1.0, Unit::Litre, Unit::Kilogram), None);
    }

    #[test]
    fn identity_conversion_holds() {
        assert_close(convert(12.5, Unit::Foot, Unit::Foot), 12.5);
        assert_eq!(to_base(0.0, Unit::Mile), 0.0);
    }
}
