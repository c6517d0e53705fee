use contracts::system::session::PersonaSesion;
use web_sys::window;

use crate::shared::config::config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn decode_session(raw: &str) -> Option<PersonaSesion> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Stored session is unreadable: {}", e);
            None
        }
    }
}

/// Signed-in person saved by the login flow
pub fn get_session() -> Option<PersonaSesion> {
    let key = &config().session.storage_key;
    let raw = get_local_storage()?.get_item(key).ok()??;
    decode_session(&raw)
}
