pub mod view;
pub mod view_model;

pub use view::MeasurementField;
pub use view_model::MeasurementFieldVm;
