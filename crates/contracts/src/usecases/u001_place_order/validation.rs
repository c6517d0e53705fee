use thiserror::Error;

use super::payload::OrderSelection;
use crate::domain::a002_reservation::aggregate::ReservaUsuario;
use crate::domain::a003_sale_offer::aggregate::OfertaVenta;

/// Requested quantities out of range. Each variant carries one
/// `Revisar cantidad de "<descripcion>"` line per offending row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    #[error("Reservas \n{0}")]
    Reservations(String),

    #[error("Disponibles \n{0}")]
    Offers(String),
}

/// Row that can be turned into an order line
pub trait OrderLine {
    fn descripcion(&self) -> &str;
    fn cantidad_pedir(&self) -> f64;
    /// Highest accepted requested quantity
    fn cap(&self) -> f64;
}

impl OrderLine for ReservaUsuario {
    fn descripcion(&self) -> &str {
        &self.descripcion
    }

    fn cantidad_pedir(&self) -> f64 {
        self.cantidad_pedir
    }

    fn cap(&self) -> f64 {
        ReservaUsuario::cap(self)
    }
}

impl OrderLine for OfertaVenta {
    fn descripcion(&self) -> &str {
        &self.descripcion
    }

    fn cantidad_pedir(&self) -> f64 {
        self.cantidad_pedir
    }

    fn cap(&self) -> f64 {
        OfertaVenta::cap(self)
    }
}

/// Rows with a requested quantity in `(0, cap]`, or the accumulated
/// messages of every row outside `[0, cap]`.
fn select_rows<T: OrderLine>(rows: &[T]) -> Result<Vec<&T>, String> {
    let mut errors = String::new();
    let mut selected = Vec::new();

    for row in rows {
        let qty = row.cantidad_pedir();
        if qty < 0.0 || qty > row.cap() {
            errors.push_str(&format!("Revisar cantidad de \"{}\"\n", row.descripcion()));
        } else if qty > 0.0 {
            selected.push(row);
        }
    }

    if errors.is_empty() {
        Ok(selected)
    } else {
        Err(errors)
    }
}

/// Validate reservations first, then offers. Offers are only checked when
/// every reservation passed.
pub fn select_order_lines<'a>(
    reservas: &'a [ReservaUsuario],
    ofertas: &'a [OfertaVenta],
) -> Result<OrderSelection<'a>, QuantityError> {
    let reservas = select_rows(reservas).map_err(QuantityError::Reservations)?;
    let ofertas = select_rows(ofertas).map_err(QuantityError::Offers)?;
    Ok(OrderSelection { reservas, ofertas })
}
