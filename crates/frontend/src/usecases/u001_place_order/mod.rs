pub mod screen;
pub mod state;
pub mod view;

pub use screen::{PlaceOrderScreen, SubmitOutcome};
pub use view::PlaceOrderPage;
