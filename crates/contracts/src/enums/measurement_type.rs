use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::unit::Unit;

/// Categories of physical quantity supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementType {
    Length,
    Time,
    Weight,
    Volume,
}

/// Raised when a container configures a field with an unrecognized type code.
/// This signals a programming error on the container side, so it propagates
/// instead of being recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized measurement type: {0:?}")]
pub struct InvalidMeasurementTypeError(pub String);

impl MeasurementType {
    /// Get the type code (the value used in markup attributes)
    pub fn code(&self) -> &'static str {
        match self {
            MeasurementType::Length => "length",
            MeasurementType::Time => "time",
            MeasurementType::Weight => "weight",
            MeasurementType::Volume => "volume",
        }
    }

    /// Get the human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MeasurementType::Length => "Length",
            MeasurementType::Time => "Time",
            MeasurementType::Weight => "Weight",
            MeasurementType::Volume => "Volume",
        }
    }

    /// Get all measurement types
    pub fn all() -> Vec<MeasurementType> {
        vec![
            MeasurementType::Length,
            MeasurementType::Time,
            MeasurementType::Weight,
            MeasurementType::Volume,
        ]
    }

    /// Parse from a type code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "length" => Some(MeasurementType::Length),
            "time" => Some(MeasurementType::Time),
            "weight" => Some(MeasurementType::Weight),
            "volume" => Some(MeasurementType::Volume),
            _ => None,
        }
    }

    /// Parse from a type code, rejecting unknown codes with a typed error
    pub fn parse(code: &str) -> Result<Self, InvalidMeasurementTypeError> {
        Self::from_code(code).ok_or_else(|| InvalidMeasurementTypeError(code.to_string()))
    }

    /// The unit all quantities of this type are normalized to
    pub fn base_unit(&self) -> Unit {
        match self {
            MeasurementType::Length => Unit::Metre,
            MeasurementType::Time => Unit::Second,
            MeasurementType::Weight => Unit::Kilogram,
            MeasurementType::Volume => Unit::Litre,
        }
    }
}

impl std::fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        for t in MeasurementType::all() {
            assert_eq!(MeasurementType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        let err = MeasurementType::parse("temperature").unwrap_err();
        assert_eq!(err, InvalidMeasurementTypeError("temperature".to_string()));
        assert!(MeasurementType::parse("Length").is_err());
        assert!(MeasurementType::parse("").is_err());
    }

    #[test]
    fn base_units_match_their_type() {
        for t in MeasurementType::all() {
            assert_eq!(t.base_unit().measurement_type(), t);
            assert_eq!(t.base_unit().to_base_factor(), 1.0);
        }
    }
}
