use contracts::domain::a002_reservation::aggregate::ReservaUsuario;
use contracts::domain::a003_sale_offer::aggregate::OfertaVenta;
use contracts::domain::a004_order::aggregate::PedidoIntegrado;
use contracts::system::session::PersonaSesion;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_place_order::{Category, PlaceOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

use super::screen::{PlaceOrderScreen, SubmitOutcome};
use super::state::{create_state, PlaceOrderState};
use crate::shared::api_service::{use_api_service, HttpApiService};
use crate::shared::components::table::{format_money, format_quantity};
use crate::shared::components::ui::{QuantityInput, Select};
use crate::shared::components::{PageHeader, SessionQr};
use crate::shared::icons::icon;
use crate::shared::notifier::{NoticeBar, SignalNotifier};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

type Screen = PlaceOrderScreen<HttpApiService, SignalNotifier>;
type ScreenHandle = StoredValue<Rc<Screen>, LocalStorage>;

fn run<F, Fut>(screen: ScreenHandle, task: F)
where
    F: FnOnce(Rc<Screen>) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let screen = screen.get_value();
    spawn_local(task(screen));
}

/// Place-order page.
///
/// Reloads on mount and every time `reload` changes.
#[component]
pub fn PlaceOrderPage(
    session: PersonaSesion,
    notifier: SignalNotifier,
    /// Bumped by the host to request a full reload
    #[prop(optional, into)]
    reload: Option<Signal<u32>>,
) -> impl IntoView {
    let state = create_state();
    let subtitle = session.nombre.clone();
    let screen = PlaceOrderScreen::new(use_api_service(), notifier, session)
        .with_observer(move |s| state.set(s.clone()));
    let screen: ScreenHandle = StoredValue::new_local(Rc::new(screen));

    Effect::new(move |_| {
        if let Some(reload) = reload {
            reload.track();
        }
        run(screen, |s| async move { s.reload().await });
    });

    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let busy = Signal::derive(move || state.with(|s| s.is_loading() || s.submitting));

    let location_options = Signal::derive(move || {
        state.with(|s| {
            s.localidades
                .iter()
                .map(|l| (l.idlocalidad.to_string(), l.label()))
                .collect::<Vec<_>>()
        })
    });
    let selected_location = Signal::derive(move || {
        state.with(|s| s.idlocalidad.map(|id| id.to_string()).unwrap_or_default())
    });
    let on_location_change = Callback::new(move |value: String| match value.parse::<i64>() {
        Ok(id) => run(screen, move |s| async move { s.select_location(id).await }),
        Err(_) => log::warn!("Invalid location value '{}'", value),
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        run(screen, |s| async move {
            if s.submit_orders().await == SubmitOutcome::Submitted {
                log::info!("Order placed");
            }
        })
    };

    view! {
        <PageFrame page_id="u001_place_order--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=PlaceOrder::display_name() subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| run(screen, |s| async move { s.reload().await })
                    disabled=busy
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit disabled=busy>
                    {icon("cart")}
                    {move || if state.with(|s| s.submitting) { " Enviando..." } else { " Pedir" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <NoticeBar notifier=notifier />

                <div class="place-order__top">
                    <Select
                        label="Localidad"
                        id="place-order-location"
                        value=selected_location
                        options=location_options
                        on_change=on_location_change
                        disabled=busy
                    />
                    <div class="place-order__qr" title="Código de ingreso">
                        {icon("ticket")}
                        <SessionQr value=Signal::derive(move || state.with(|s| s.qr_value.clone())) />
                    </div>
                </div>

                <section class="place-order__section">
                    <h2 class="place-order__section-title">"Reservas"</h2>
                    <ReservationsTable state=state screen=screen disabled=busy />
                </section>

                <section class="place-order__section">
                    <h2 class="place-order__section-title">"Disponibles"</h2>
                    <For
                        each=move || state.with(|s| s.categories.clone())
                        key=|c: &Category| (c.id, c.is_open)
                        children=move |category| view! {
                            <CategoryBlock category=category state=state screen=screen disabled=busy />
                        }
                    />
                    <Show when=move || state.with(|s| s.categories.is_empty() && !s.is_loading())>
                        <div class="place-order__empty">"No hay ofertas disponibles"</div>
                    </Show>
                </section>

                <section class="place-order__section">
                    <h2 class="place-order__section-title">"Pedidos pendientes"</h2>
                    <CurrentOrdersTable state=state />
                </section>
            </div>
        </PageFrame>
    }
}

#[component]
fn ReservationsTable(
    state: RwSignal<PlaceOrderState>,
    screen: ScreenHandle,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Descripción"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Reservado"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Pedir"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || state.with(|s| s.reservas.clone())
                    key=|r: &ReservaUsuario| (r.idreserva, r.descripcion.clone(), r.cantidad.to_bits())
                    children=move |row| {
                        let id = row.idreserva;
                        let value = Signal::derive(move || {
                            state.with(|s| {
                                s.reservas
                                    .iter()
                                    .find(|r| r.idreserva == id)
                                    .map(|r| r.cantidad_pedir)
                                    .unwrap_or_default()
                            })
                        });
                        let on_change = Callback::new(move |qty: f64| {
                            screen.get_value().set_reservation_quantity(id, qty)
                        });
                        let reservado = format_quantity(row.cantidad);
                        let descripcion = row.descripcion;
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>{descripcion}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{reservado}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <QuantityInput
                                        value=value
                                        on_change=on_change
                                        disabled=disabled
                                    />
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}

#[component]
fn CategoryBlock(
    category: Category,
    state: RwSignal<PlaceOrderState>,
    screen: ScreenHandle,
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = category.id;
    let is_open = category.is_open;

    view! {
        <div class="place-order__category">
            <div
                class="place-order__category-header"
                on:click=move |_| screen.get_value().toggle_category(id)
            >
                {icon(if is_open { "chevron-down" } else { "chevron-right" })}
                <span>{category.name}</span>
            </div>
            <Show when=move || is_open>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Oferta"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Precio"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Disponible"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Pedir"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.with(|s| s.ofertas_of(id))
                            key=|o: &OfertaVenta| (o.idoferta_venta, o.descripcion.clone(), o.cantidad_disponible.to_bits())
                            children=move |offer| view! { <OfferRow offer=offer state=state screen=screen disabled=disabled /> }
                        />
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}

fn price_label(precio: Option<f64>) -> String {
    precio.map(format_money).unwrap_or_else(|| "-".to_string())
}

#[component]
fn OfferRow(
    offer: OfertaVenta,
    state: RwSignal<PlaceOrderState>,
    screen: ScreenHandle,
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = offer.idoferta_venta;
    let value = Signal::derive(move || {
        state.with(|s| {
            s.ofertas
                .iter()
                .find(|o| o.idoferta_venta == id)
                .map(|o| o.cantidad_pedir)
                .unwrap_or_default()
        })
    });
    let on_change = Callback::new(move |qty: f64| screen.get_value().set_offer_quantity(id, qty));
    let precio = price_label(offer.precio);
    let disponible = format_quantity(offer.cantidad_disponible);
    let descripcion = offer.descripcion;

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{descripcion}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{precio}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{disponible}</TableCellLayout>
            </TableCell>
            <TableCell>
                <QuantityInput value=value on_change=on_change disabled=disabled />
            </TableCell>
        </TableRow>
    }
}

#[component]
fn CurrentOrdersTable(state: RwSignal<PlaceOrderState>) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=80.0>"N°"</TableHeaderCell>
                    <TableHeaderCell>"Descripción"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Subtotal"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || state.with(|s| s.pedidos_actuales.clone())
                    key=|p: &PedidoIntegrado| (p.idpedido, p.subtotal.to_bits())
                    children=move |pedido| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout>{pedido.idpedido}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    {pedido.descripcion.clone().unwrap_or_default()}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_money(pedido.subtotal)}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }
                />
                <TableRow class="table__totals-row">
                    <TableCell>
                        <TableCellLayout><strong>"Total"</strong></TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>""</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>
                            <strong>{move || format_money(state.with(|s| s.total_pedidos))}</strong>
                        </TableCellLayout>
                    </TableCell>
                </TableRow>
            </TableBody>
        </Table>
    }
}
