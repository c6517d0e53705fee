use contracts::system::session::PersonaSesion;
use leptos::prelude::*;

use super::context::use_session;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Renders `children` with the signed-in person, or a notice when nobody
/// is signed in
#[component]
pub fn RequireSession<F, V>(children: F) -> impl IntoView
where
    F: Fn(PersonaSesion) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let session = use_session();

    move || match session.get() {
        Some(s) => children(s).into_any(),
        None => view! {
            <PageFrame page_id="session--system" category=PAGE_CAT_SYSTEM>
                <div class="alert alert--error">"Sesión no iniciada. Ingrese nuevamente."</div>
            </PageFrame>
        }
        .into_any(),
    }
}
