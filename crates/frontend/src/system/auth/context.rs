use contracts::system::session::PersonaSesion;
use leptos::prelude::*;

use super::storage;

/// Provides the signed-in person to the component tree.
/// The session is owned by the login flow; this tree only reads it.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = storage::get_session();
    match &session {
        Some(s) => log::info!("Session restored for persona {}", s.idpersona),
        None => log::warn!("No session found in localStorage"),
    }

    let (session, _) = signal(session);
    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> ReadSignal<Option<PersonaSesion>> {
    use_context::<ReadSignal<Option<PersonaSesion>>>()
        .expect("SessionProvider not found in component tree")
}
