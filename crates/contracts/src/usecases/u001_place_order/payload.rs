//! Pseudo-SQL order string accepted by `pedido/sql`.
//!
//! One record per line, records separated by `|`, no trailing separator:
//!
//! ```text
//! 'R',  <idreserva>, <cantidad>, <idpersona>| 'O', <idoferta_venta>, <cantidad>, <idpersona>
//! ```
//!
//! The backend parses this byte for byte, including the double space after
//! the reservation tag and the leading space before the offer tag.

use crate::domain::a002_reservation::aggregate::ReservaUsuario;
use crate::domain::a003_sale_offer::aggregate::OfertaVenta;

const RECORD_SEPARATOR: char = '|';

/// Lines that passed validation and will be ordered
#[derive(Debug, Clone, Default)]
pub struct OrderSelection<'a> {
    pub reservas: Vec<&'a ReservaUsuario>,
    pub ofertas: Vec<&'a OfertaVenta>,
}

impl OrderSelection<'_> {
    pub fn line_count(&self) -> usize {
        self.reservas.len() + self.ofertas.len()
    }

    pub fn to_sql(&self, idpersona: i64) -> String {
        let mut sql = String::new();

        for r in &self.reservas {
            sql.push_str(&format!(
                "'R',  {}, {}, {}{}",
                r.idreserva, r.cantidad_pedir, idpersona, RECORD_SEPARATOR
            ));
        }

        for o in &self.ofertas {
            sql.push_str(&format!(
                " 'O', {}, {}, {}{}",
                o.idoferta_venta, o.cantidad_pedir, idpersona, RECORD_SEPARATOR
            ));
        }

        sql.pop();
        sql
    }
}
