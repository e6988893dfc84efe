//! ViewModel for a single measurement field.
//!
//! Holds the field state as individual RwSignals for two-way binding, with
//! the validation and retyping rules the view relays user input through.

use contracts::enums::{InvalidMeasurementTypeError, MeasurementType, Unit};
use contracts::measurement::{parse_quantity, to_base};
use leptos::prelude::*;

/// ViewModel for a measurement field
#[derive(Clone, Copy)]
pub struct MeasurementFieldVm {
    /// Category of the measurement; set by the container, never by the user
    pub measurement_type: RwSignal<MeasurementType>,
    /// Last successfully validated quantity
    pub quantity: RwSignal<f64>,
    /// Unit picked in the embedded selector
    pub unit: RwSignal<Unit>,
    /// Whether the quantity text currently displayed passed validation
    pub input_valid: RwSignal<bool>,
}

impl MeasurementFieldVm {
    /// Create a field with the default type (length) and quantity 0
    pub fn new() -> Self {
        Self::with_type(MeasurementType::Length)
    }

    /// Create a field for the given measurement type
    pub fn with_type(measurement_type: MeasurementType) -> Self {
        Self {
            measurement_type: RwSignal::new(measurement_type),
            quantity: RwSignal::new(0.0),
            unit: RwSignal::new(measurement_type.base_unit()),
            input_valid: RwSignal::new(true),
        }
    }

    /// Retype the field from a type code.
    ///
    /// Unknown codes are rejected with `InvalidMeasurementTypeError` and
    /// leave both the type and the embedded selector untouched. A recognized
    /// code equal to the current type is a no-op. A recognized new type is
    /// adopted and the selector is reconfigured to its base unit.
    pub fn set_measurement_type(&self, code: &str) -> Result<(), InvalidMeasurementTypeError> {
        let new_type = MeasurementType::parse(code)?;
        if new_type == self.measurement_type.get_untracked() {
            return Ok(());
        }
        self.measurement_type.set(new_type);
        self.unit.set(new_type.base_unit());
        Ok(())
    }

    /// Validate one round of quantity input.
    ///
    /// On success the invalid marker is cleared, the stored quantity is
    /// updated and `true` is returned; the view raises its change
    /// notification exactly then. On failure the marker is set and the
    /// stored quantity keeps its last valid value.
    pub fn handle_quantity_input(&self, raw: &str) -> bool {
        match parse_quantity(raw) {
            Ok(value) => {
                self.input_valid.set(true);
                self.quantity.set(value);
                true
            }
            Err(_) => {
                self.input_valid.set(false);
                false
            }
        }
    }

    /// The quantity converted to the base unit of the field's type
    pub fn base_quantity(&self) -> f64 {
        to_base(self.quantity.get(), self.unit.get())
    }
}

impl Default for MeasurementFieldVm {
    fn default() -> Self {
        Self::new()
    }
}
