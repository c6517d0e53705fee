//! Response envelope shared by every backend endpoint and the resource names
//! the client talks to.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const RESOURCE_LOCALIDAD: &str = "localidad";
pub const RESOURCE_RESERVA: &str = "reserva";
pub const RESOURCE_OFERTA_VENTA: &str = "ofertaventa";
pub const RESOURCE_PEDIDO: &str = "pedido";

/// Batch-insert endpoint that accepts the pseudo-SQL order string
pub const PATH_PEDIDO_SQL: &str = "pedido/sql";

/// Filter flag sent with every filtered query issued by the order screen
pub const FILTER_FLAG_NO: &str = "N";

/// `{ok, data, error}` envelope returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiResponse {
    pub ok: bool,

    #[serde(default)]
    pub data: Value,

    #[serde(default)]
    pub error: Option<Value>,
}

impl ApiResponse {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data,
            error: None,
        }
    }

    pub fn failure(error: Value) -> Self {
        Self {
            ok: false,
            data: Value::Null,
            error: Some(error),
        }
    }

    /// Decode `data` as a list of rows. `null` decodes as an empty list.
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        if self.data.is_null() {
            return Ok(Vec::new());
        }
        Vec::<T>::deserialize(&self.data)
    }
}

/// Human-readable message for a backend error payload.
///
/// The backend reports errors either as a plain string or as an object
/// carrying the text under one of a few known keys (database errors come
/// with `sqlMessage`).
pub fn error_message(error: &Value) -> String {
    match error {
        Value::Null => "Error desconocido".to_string(),
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            for key in ["mensaje", "message", "sqlMessage", "error"] {
                match map.get(key) {
                    Some(Value::String(s)) if !s.is_empty() => return s.clone(),
                    Some(nested @ Value::Object(_)) => return error_message(nested),
                    _ => {}
                }
            }
            error.to_string()
        }
        other => other.to_string(),
    }
}
