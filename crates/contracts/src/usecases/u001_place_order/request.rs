use serde::{Deserialize, Serialize};

use super::payload::OrderSelection;
use crate::domain::a004_order::aggregate::ESTADO_PENDIENTE;

/// Filter for the reservations a person holds at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservaFiltro {
    pub idpersona: i64,
    pub idlocalidad: i64,
}

/// Filter for open offers that can be ordered directly: no existing
/// reservation, final type, closed for further reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfertaVentaFiltro {
    pub idpersona: i64,
    pub sinreserva: String,
    pub tipo: String,
    pub idlocalidad: i64,
    pub activas: String,
}

impl OfertaVentaFiltro {
    pub fn orderable(idpersona: i64, idlocalidad: i64) -> Self {
        Self {
            idpersona,
            sinreserva: "S".into(),
            tipo: "F".into(),
            idlocalidad,
            activas: "N".into(),
        }
    }
}

/// Filter for the orders of a person at a location in a given status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PedidoFiltro {
    pub idpersona: i64,
    pub estado: String,
    pub idlocalidad: i64,
}

impl PedidoFiltro {
    pub fn pending(idpersona: i64, idlocalidad: i64) -> Self {
        Self {
            idpersona,
            estado: ESTADO_PENDIENTE.into(),
            idlocalidad,
        }
    }
}

/// Body of the batch-insert request (`pedido/sql`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PedidoSqlRequest {
    pub sql: String,
    pub idpersona: i64,
}

impl PedidoSqlRequest {
    pub fn new(selection: &OrderSelection<'_>, idpersona: i64) -> Self {
        Self {
            sql: selection.to_sql(idpersona),
            idpersona,
        }
    }
}
