pub mod measurement_type;
pub mod unit;

pub use measurement_type::{InvalidMeasurementTypeError, MeasurementType};
pub use unit::Unit;
