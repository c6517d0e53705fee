use serde::{Deserialize, Serialize};

/// Open sale offer (oferta de venta integrada): quantity of an article that
/// can be ordered directly, not tied to an existing reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfertaVenta {
    pub idoferta_venta: i64,

    /// Article id, used as the grouping key for categories
    pub idarticulo: i64,

    /// Article name
    #[serde(default)]
    pub articulo: String,

    pub cantidad_disponible: f64,

    #[serde(default)]
    pub descripcion: String,

    #[serde(default)]
    pub precio: Option<f64>,

    #[serde(default)]
    pub cantidad_pedir: f64,
}

impl OfertaVenta {
    pub fn cap(&self) -> f64 {
        self.cantidad_disponible
    }
}
