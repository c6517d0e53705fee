use leptos::prelude::*;

/// Page title bar with an actions slot on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Rendered under the title when present
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
