use serde::{Deserialize, Serialize};

/// Order status code for orders that have not been fulfilled yet
pub const ESTADO_PENDIENTE: &str = "P";

/// Summary row of an order (PedidoIntegrado), read-only for the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PedidoIntegrado {
    pub idpedido: i64,

    #[serde(default)]
    pub subtotal: f64,

    #[serde(default)]
    pub estado: String,

    #[serde(default)]
    pub descripcion: Option<String>,
}

/// Running total of the given orders
pub fn total_subtotal(pedidos: &[PedidoIntegrado]) -> f64 {
    pedidos.iter().map(|p| p.subtotal).sum()
}
