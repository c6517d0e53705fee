use serde::{Deserialize, Serialize};

/// Reservation held by the signed-in person (ReservaUsuario).
///
/// `cantidad` is the committed quantity; `cantidad_pedir` is what the person
/// wants to turn into an order now. The backend may omit `cantidad_pedir`;
/// the screen initializes it from `cantidad` when the list is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservaUsuario {
    pub idreserva: i64,

    #[serde(default)]
    pub descripcion: String,

    pub cantidad: f64,

    #[serde(default)]
    pub cantidad_pedir: f64,
}

impl ReservaUsuario {
    /// Reset the requested quantity to the committed quantity
    pub fn resync_cantidad_pedir(&mut self) {
        self.cantidad_pedir = self.cantidad;
    }

    /// Upper bound accepted for `cantidad_pedir`
    pub fn cap(&self) -> f64 {
        self.cantidad
    }
}
