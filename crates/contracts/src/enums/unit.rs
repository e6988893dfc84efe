use serde::{Deserialize, Serialize};

use super::measurement_type::MeasurementType;

/// Units offered by the unit selector, across all measurement types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    // Length
    Millimetre,
    Centimetre,
    Decimetre,
    Metre,
    Kilometre,
    Inch,
    Foot,
    Yard,
    Mile,
    // Time
    Second,
    Minute,
    Hour,
    Day,
    // Weight
    Milligram,
    Gram,
    Hectogram,
    Kilogram,
    Ounce,
    Pound,
    // Volume
    Millilitre,
    Centilitre,
    Decilitre,
    Litre,
    Pint,
    Gallon,
}

impl Unit {
    /// Get the unit code (the value used in option elements)
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Millimetre => "mm",
            Unit::Centimetre => "cm",
            Unit::Decimetre => "dm",
            Unit::Metre => "m",
            Unit::Kilometre => "km",
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Yard => "yd",
            Unit::Mile => "mi",
            Unit::Second => "s",
            Unit::Minute => "min",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Milligram => "mg",
            Unit::Gram => "g",
            Unit::Hectogram => "hg",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Millilitre => "ml",
            Unit::Centilitre => "cl",
            Unit::Decilitre => "dl",
            Unit::Litre => "l",
            Unit::Pint => "pt",
            Unit::Gallon => "gal",
        }
    }

    /// Get the human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Millimetre => "millimetres",
            Unit::Centimetre => "centimetres",
            Unit::Decimetre => "decimetres",
            Unit::Metre => "metres",
            Unit::Kilometre => "kilometres",
            Unit::Inch => "inches",
            Unit::Foot => "feet",
            Unit::Yard => "yards",
            Unit::Mile => "miles",
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Milligram => "milligrams",
            Unit::Gram => "grams",
            Unit::Hectogram => "hectograms",
            Unit::Kilogram => "kilograms",
            Unit::Ounce => "ounces",
            Unit::Pound => "pounds",
            Unit::Millilitre => "millilitres",
            Unit::Centilitre => "centilitres",
            Unit::Decilitre => "decilitres",
            Unit::Litre => "litres",
            Unit::Pint => "pints",
            Unit::Gallon => "gallons",
        }
    }

    /// The measurement type this unit belongs to
    pub fn measurement_type(&self) -> MeasurementType {
        match self {
            Unit::Millimetre
            | Unit::Centimetre
            | Unit::Decimetre
            | Unit::Metre
            | Unit::Kilometre
            | Unit::Inch
            | Unit::Foot
            | Unit::Yard
            | Unit::Mile => MeasurementType::Length,
            Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => MeasurementType::Time,
            Unit::Milligram
            | Unit::Gram
            | Unit::Hectogram
            | Unit::Kilogram
            | Unit::Ounce
            | Unit::Pound => MeasurementType::Weight,
            Unit::Millilitre
            | Unit::Centilitre
            | Unit::Decilitre
            | Unit::Litre
            | Unit::Pint
            | Unit::Gallon => MeasurementType::Volume,
        }
    }

    /// Multiplier converting one of this unit into the type's base unit
    pub fn to_base_factor(&self) -> f64 {
        match self {
            Unit::Millimetre => 0.001,
            Unit::Centimetre => 0.01,
            Unit::Decimetre => 0.1,
            Unit::Metre => 1.0,
            Unit::Kilometre => 1000.0,
            Unit::Inch => 0.0254,
            Unit::Foot => 0.3048,
            Unit::Yard => 0.9144,
            Unit::Mile => 1609.344,
            Unit::Second => 1.0,
            Unit::Minute => 60.0,
            Unit::Hour => 3600.0,
            Unit::Day => 86400.0,
            Unit::Milligram => 1e-6,
            Unit::Gram => 0.001,
            Unit::Hectogram => 0.1,
            Unit::Kilogram => 1.0,
            Unit::Ounce => 0.028349523125,
            Unit::Pound => 0.45359237,
            Unit::Millilitre => 0.001,
            Unit::Centilitre => 0.01,
            Unit::Decilitre => 0.1,
            Unit::Litre => 1.0,
            Unit::Pint => 0.473176473,
            Unit::Gallon => 3.785411784,
        }
    }

    /// All units offered for the given measurement type, smallest first
    pub fn all_for(measurement_type: MeasurementType) -> Vec<Unit> {
        match measurement_type {
            MeasurementType::Length => vec![
                Unit::Millimetre,
                Unit::Centimetre,
                Unit::Decimetre,
                Unit::Metre,
                Unit::Kilometre,
                Unit::Inch,
                Unit::Foot,
                Unit::Yard,
                Unit::Mile,
            ],
            MeasurementType::Time => vec![Unit::Second, Unit::Minute, Unit::Hour, Unit::Day],
            MeasurementType::Weight => vec![
                Unit::Milligram,
                Unit::Gram,
                Unit::Hectogram,
                Unit::Kilogram,
                Unit::Ounce,
                Unit::Pound,
            ],
            MeasurementType::Volume => vec![
                Unit::Millilitre,
                Unit::Centilitre,
                Unit::Decilitre,
                Unit::Litre,
                Unit::Pint,
                Unit::Gallon,
            ],
        }
    }

    /// Parse from a unit code
    pub fn from_code(code: &str) -> Option<Self> {
        MeasurementType::all()
            .into_iter()
            .flat_map(Unit::all_for)
            .find(|u| u.code() == code)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_round_trip() {
        let mut seen = Vec::new();
        for t in MeasurementType::all() {
            for u in Unit::all_for(t) {
                assert!(!seen.contains(&u.code()), "duplicate code {}", u.code());
                seen.push(u.code());
                assert_eq!(Unit::from_code(u.code()), Some(u));
            }
        }
        assert_eq!(Unit::from_code("furlong"), None);
    }

    #[test]
    fn every_unit_belongs_to_its_list() {
        for t in MeasurementType::all() {
            for u in Unit::all_for(t) {
                assert_eq!(u.measurement_type(), t);
            }
        }
    }
}
