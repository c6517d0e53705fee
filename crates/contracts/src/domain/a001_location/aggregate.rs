use serde::{Deserialize, Serialize};

/// Location (localidad): the venue that scopes which reservations and
/// offers are visible to a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Localidad {
    pub idlocalidad: i64,

    #[serde(default)]
    pub descripcion: String,
}

impl Localidad {
    /// Label shown in the location selector.
    pub fn label(&self) -> String {
        if self.descripcion.trim().is_empty() {
            format!("Localidad {}", self.idlocalidad)
        } else {
            self.descripcion.clone()
        }
    }
}
