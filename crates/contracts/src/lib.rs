pub mod enums;
pub mod measurement;
