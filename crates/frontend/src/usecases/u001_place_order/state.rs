use contracts::domain::a001_location::aggregate::Localidad;
use contracts::domain::a002_reservation::aggregate::ReservaUsuario;
use contracts::domain::a003_sale_offer::aggregate::OfertaVenta;
use contracts::domain::a004_order::aggregate::{total_subtotal, PedidoIntegrado};
use contracts::usecases::u001_place_order::{build_categories, Category};
use leptos::prelude::*;

/// Everything the place-order page displays. Lists are replaced wholesale
/// on every successful load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaceOrderState {
    pub localidades: Vec<Localidad>,
    pub idlocalidad: Option<i64>,
    pub reservas: Vec<ReservaUsuario>,
    pub ofertas: Vec<OfertaVenta>,
    pub categories: Vec<Category>,
    pub pedidos_actuales: Vec<PedidoIntegrado>,
    pub total_pedidos: f64,
    pub qr_value: String,
    pub submitting: bool,
    pending_requests: u32,
}

impl PlaceOrderState {
    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn begin_request(&mut self) {
        self.pending_requests += 1;
    }

    pub fn end_request(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }

    /// Replace the location list and select its first entry.
    /// An empty list clears the selection and everything scoped to it.
    pub fn set_localidades(&mut self, rows: Vec<Localidad>) -> Option<i64> {
        self.localidades = rows;
        self.idlocalidad = self.localidades.first().map(|l| l.idlocalidad);
        if self.idlocalidad.is_none() {
            self.reservas.clear();
            self.ofertas.clear();
            self.categories.clear();
            self.pedidos_actuales.clear();
            self.total_pedidos = 0.0;
        }
        self.idlocalidad
    }

    /// Reset every requested quantity to the committed quantity
    pub fn resync_reservas(&mut self) {
        self.reservas
            .iter_mut()
            .for_each(ReservaUsuario::resync_cantidad_pedir);
    }

    pub fn set_reservas(&mut self, rows: Vec<ReservaUsuario>) {
        self.reservas = rows;
        self.resync_reservas();
    }

    pub fn set_ofertas(&mut self, rows: Vec<OfertaVenta>) {
        self.ofertas = rows;
        self.categories = build_categories(&self.ofertas);
    }

    pub fn set_pedidos(&mut self, rows: Vec<PedidoIntegrado>) {
        self.total_pedidos = total_subtotal(&rows);
        self.pedidos_actuales = rows;
    }

    /// Returns false when no category has that id
    pub fn toggle_category(&mut self, id: i64) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.toggle();
                true
            }
            None => false,
        }
    }

    pub fn set_reserva_cantidad(&mut self, idreserva: i64, cantidad: f64) -> bool {
        match self.reservas.iter_mut().find(|r| r.idreserva == idreserva) {
            Some(row) => {
                row.cantidad_pedir = cantidad;
                true
            }
            None => false,
        }
    }

    pub fn set_oferta_cantidad(&mut self, idoferta_venta: i64, cantidad: f64) -> bool {
        match self
            .ofertas
            .iter_mut()
            .find(|o| o.idoferta_venta == idoferta_venta)
        {
            Some(row) => {
                row.cantidad_pedir = cantidad;
                true
            }
            None => false,
        }
    }

    /// Offers grouped under the given category, in list order
    pub fn ofertas_of(&self, idarticulo: i64) -> Vec<OfertaVenta> {
        self.ofertas
            .iter()
            .filter(|o| o.idarticulo == idarticulo)
            .cloned()
            .collect()
    }
}

pub fn create_state() -> RwSignal<PlaceOrderState> {
    RwSignal::new(PlaceOrderState::default())
}
