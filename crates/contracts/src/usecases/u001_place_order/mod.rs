pub mod categories;
pub mod payload;
pub mod request;
pub mod validation;

pub use categories::{build_categories, Category};
pub use payload::OrderSelection;
pub use request::{OfertaVentaFiltro, PedidoFiltro, PedidoSqlRequest, ReservaFiltro};
pub use validation::{select_order_lines, QuantityError};

use crate::usecases::common::UseCaseMetadata;

pub struct PlaceOrder;

impl UseCaseMetadata for PlaceOrder {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "place_order"
    }

    fn display_name() -> &'static str {
        "Pedir"
    }
}
