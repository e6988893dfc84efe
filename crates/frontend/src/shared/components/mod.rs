pub mod unit_selector;

pub use unit_selector::UnitSelector;
