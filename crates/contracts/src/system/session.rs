use serde::{Deserialize, Serialize};

/// Signed-in person as stored by the login flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonaSesion {
    pub idpersona: i64,
    pub nombre: String,
}

impl PersonaSesion {
    /// Value encoded in the session QR code: `"<idpersona>|<nombre>"`
    pub fn qr_value(&self) -> String {
        format!("{}|{}", self.idpersona, self.nombre)
    }
}
