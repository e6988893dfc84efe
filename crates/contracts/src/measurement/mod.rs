pub mod convert;
pub mod quantity;

pub use convert::{convert, to_base};
pub use quantity::{parse_quantity, InvalidQuantityError};
