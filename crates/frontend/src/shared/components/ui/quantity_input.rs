use leptos::prelude::*;

/// Parse user input as a quantity. Empty input counts as zero; anything
/// else that is not a number is rejected.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.replace(',', ".").parse::<f64>().ok().filter(|q| q.is_finite())
}

/// Text input for a requested quantity.
///
/// A plain text field with a decimal keypad, so the raw text reaches
/// [`parse_quantity`]. Only parsable values reach `on_change`; a rejected
/// edit shows the previous quantity again. The range is checked on submit.
#[component]
pub fn QuantityInput(
    #[prop(into)]
    value: Signal<f64>,
    on_change: Callback<f64>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            class="form__input form__input--quantity"
            type="text"
            inputmode="decimal"
            autocomplete="off"
            prop:value=move || value.get().to_string()
            disabled=move || disabled.get()
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                match parse_quantity(&raw) {
                    Some(qty) => on_change.run(qty),
                    None => {
                        log::debug!("Ignoring quantity input '{}'", raw);
                        event_target::<web_sys::HtmlInputElement>(&ev)
                            .set_value(&value.get_untracked().to_string());
                    }
                }
            }
        />
    }
}
