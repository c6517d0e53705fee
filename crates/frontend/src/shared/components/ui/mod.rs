pub mod quantity_input;
pub mod select;

pub use quantity_input::{parse_quantity, QuantityInput};
pub use select::Select;
