use leptos::prelude::*;
use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::QrCode;

const QR_MIN_SIZE: u32 = 160;

/// SVG markup of `value` encoded as a QR code
pub fn qr_svg(value: &str) -> Result<String, QrError> {
    let code = QrCode::new(value.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// QR code of the signed-in person, shown at the venue entrance
#[component]
pub fn SessionQr(#[prop(into)] value: Signal<String>) -> impl IntoView {
    let markup = Memo::new(move |_| {
        let value = value.get();
        if value.is_empty() {
            return String::new();
        }
        match qr_svg(&value) {
            Ok(svg) => svg,
            Err(e) => {
                log::error!("Cannot encode session QR: {}", e);
                String::new()
            }
        }
    });

    view! {
        <div class="session-qr" inner_html=move || markup.get()></div>
        <code class="session-qr__text">{move || value.get()}</code>
    }
}
