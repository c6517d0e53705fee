use leptos::prelude::*;
use thaw::*;

use crate::shared::api_service::{provide_api_service, HttpApiService};
use crate::shared::config::config;
use crate::shared::notifier::SignalNotifier;
use crate::system::auth::{RequireSession, SessionProvider};
use crate::usecases::u001_place_order::PlaceOrderPage;

#[component]
pub fn App() -> impl IntoView {
    provide_api_service(HttpApiService::new());
    let notifier = SignalNotifier::new(config().notifications.success_timeout_ms);

    view! {
        <ConfigProvider>
            <SessionProvider>
                <RequireSession let:session>
                    <PlaceOrderPage session=session notifier=notifier />
                </RequireSession>
            </SessionProvider>
        </ConfigProvider>
    }
}
