//! Comparison math for the compare page, kept free of view code.

use crate::shared::format::format_quantity;
use contracts::enums::Unit;
use contracts::measurement::to_base;

/// One measurement as read back from a field when a notification fires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub quantity: f64,
    pub unit: Unit,
}

/// Outcome of comparing the measurements currently on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Fewer than two measurements on the page
    NotEnough,
    /// The measurements use more than one measurement type
    Mixed,
    /// All measurements are equal in the base unit
    AllEqual,
    /// Position of the largest measurement (first among ties)
    Largest(usize),
}

// Tolerance for treating two converted values as equal; conversion factors
// are not exactly representable, so strict equality would misreport ties.
const RELATIVE_EPSILON: f64 = 1e-9;

fn roughly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= RELATIVE_EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Compare measurements by their base-unit value.
pub fn compare(measurements: &[Measurement]) -> Comparison {
    if measurements.len() < 2 {
        return Comparison::NotEnough;
    }
    let first_type = measurements[0].unit.measurement_type();
    if measurements
        .iter()
        .any(|m| m.unit.measurement_type() != first_type)
    {
        return Comparison::Mixed;
    }

    let bases: Vec<f64> = measurements
        .iter()
        .map(|m| to_base(m.quantity, m.unit))
        .collect();
    if bases.iter().all(|b| roughly_equal(*b, bases[0])) {
        return Comparison::AllEqual;
    }

    let mut largest = 0;
    for (i, base) in bases.iter().enumerate() {
        if *base > bases[largest] {
            largest = i;
        }
    }
    Comparison::Largest(largest)
}

/// Render one measurement with its base-unit equivalent,
/// e.g. "12.5 centimetres = 0.125 m".
pub fn describe(measurement: &Measurement) -> String {
    let base = measurement.unit.measurement_type().base_unit();
    format!(
        "{} {} = {} {}",
        format_quantity(measurement.quantity, 6),
        measurement.unit.display_name(),
        format_quantity(to_base(measurement.quantity, measurement.unit), 6),
        base.code(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(quantity: f64, unit: Unit) -> Measurement {
        Measurement { quantity, unit }
    }

    #[test]
    fn needs_at_least_two_measurements() {
        assert_eq!(compare(&[]), Comparison::NotEnough);
        assert_eq!(compare(&[m(1.0, Unit::Metre)]), Comparison::NotEnough);
    }

    #[test]
    fn equal_measurements_in_different_units() {
        let result = compare(&[m(2.0, Unit::Metre), m(200.0, Unit::Centimetre)]);
        assert_eq!(result, Comparison::AllEqual);
    }

    #[test]
    fn picks_the_largest_measurement() {
        let result = compare(&[
            m(1.0, Unit::Metre),
            m(90.0, Unit::Centimetre),
            m(120.0, Unit::Centimetre),
        ]);
        assert_eq!(result, Comparison::Largest(2));
    }

    #[test]
    fn mixed_types_are_not_comparable() {
        let result = compare(&[m(1.0, Unit::Metre), m(1.0, Unit::Second)]);
        assert_eq!(result, Comparison::Mixed);
    }

    #[test]
    fn describes_a_measurement_with_its_base_value() {
        assert_eq!(
            describe(&m(12.5, Unit::Centimetre)),
            "12.5 centimetres = 0.125 m"
        );
        assert_eq!(describe(&m(0.0, Unit::Hour)), "0 hours = 0 s");
    }
}
