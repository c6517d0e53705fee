//! Generic REST client used by the screens
//!
//! Every endpoint answers with the `{ok, data, error}` envelope. Screens only
//! see [`ApiService`]; [`HttpApiService`] is the browser binding over
//! `gloo-net`.

use async_trait::async_trait;
use contracts::shared::api::{error_message, ApiResponse};
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use super::api_utils::api_url;

/// Transport-level failure. Backend-reported errors arrive as
/// `ApiResponse { ok: false, .. }` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Respuesta inválida: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait ApiService {
    /// Full list of a resource
    async fn fetch(&self, resource: &str) -> Result<ApiResponse, ApiError>;

    /// List of a resource restricted by `filter`
    async fn fetch_filtered<F>(
        &self,
        resource: &str,
        filter: &F,
        flag: &str,
    ) -> Result<ApiResponse, ApiError>
    where
        F: Serialize + ?Sized;

    async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized;

    /// Text shown to the user for a backend error payload
    fn error_message(&self, error: &Value) -> String {
        error_message(error)
    }

    /// Stop the turn-polling timer started by other screens, if any
    fn stop_turn_timer(&self);
}

#[async_trait(?Send)]
impl<T: ApiService> ApiService for Rc<T> {
    async fn fetch(&self, resource: &str) -> Result<ApiResponse, ApiError> {
        (**self).fetch(resource).await
    }

    async fn fetch_filtered<F>(
        &self,
        resource: &str,
        filter: &F,
        flag: &str,
    ) -> Result<ApiResponse, ApiError>
    where
        F: Serialize + ?Sized,
    {
        (**self).fetch_filtered(resource, filter, flag).await
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        (**self).post(path, body).await
    }

    fn error_message(&self, error: &Value) -> String {
        (**self).error_message(error)
    }

    fn stop_turn_timer(&self) {
        (**self).stop_turn_timer()
    }
}

/// Interpret a response body as the backend envelope.
///
/// The backend sends the envelope with error statuses too, so the body wins
/// over the status code whenever it parses.
fn parse_envelope(status: u16, body: &str) -> Result<ApiResponse, ApiError> {
    match serde_json::from_str::<ApiResponse>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Http {
            status,
            body: body.to_string(),
        }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

type TurnTimerSlot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Browser REST client.
///
/// Clones share the turn-timer slot, so one instance is created by the app
/// and handed to every screen through [`provide_api_service`].
#[derive(Clone, Default)]
pub struct HttpApiService {
    turn_timer: TurnTimerSlot,
}

impl HttpApiService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the running turn poll. `cancel` is called once, when the
    /// timer is stopped or replaced.
    pub fn set_turn_timer(&self, cancel: impl FnOnce() + 'static) {
        let previous = self.turn_timer.borrow_mut().replace(Box::new(cancel));
        if let Some(cancel_previous) = previous {
            log::debug!("Replacing running turn timer");
            cancel_previous();
        }
    }

    async fn send(request: Request) -> Result<ApiResponse, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_envelope(status, &body)
    }

    fn post_request<B>(url: &str, body: &B) -> Result<Request, ApiError>
    where
        B: Serialize + ?Sized,
    {
        Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))
    }
}

#[async_trait(?Send)]
impl ApiService for HttpApiService {
    async fn fetch(&self, resource: &str) -> Result<ApiResponse, ApiError> {
        let url = api_url(resource);
        log::debug!("GET {}", url);
        let request = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::send(request).await
    }

    async fn fetch_filtered<F>(
        &self,
        resource: &str,
        filter: &F,
        flag: &str,
    ) -> Result<ApiResponse, ApiError>
    where
        F: Serialize + ?Sized,
    {
        let url = api_url(&format!("{}/filtro/{}", resource, flag));
        log::debug!("POST {}", url);
        Self::send(Self::post_request(&url, filter)?).await
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = api_url(path);
        log::debug!("POST {}", url);
        Self::send(Self::post_request(&url, body)?).await
    }

    fn stop_turn_timer(&self) {
        let running = self.turn_timer.borrow_mut().take();
        if let Some(cancel) = running {
            log::debug!("Stopping turn timer");
            cancel();
        }
    }
}

type ApiServiceHandle = StoredValue<HttpApiService, LocalStorage>;

/// Make `api` the client shared by every screen below the current owner
pub fn provide_api_service(api: HttpApiService) {
    provide_context::<ApiServiceHandle>(StoredValue::new_local(api));
}

/// The shared client provided by [`provide_api_service`]
pub fn use_api_service() -> HttpApiService {
    use_context::<ApiServiceHandle>()
        .expect("provide_api_service was not called above this component")
        .get_value()
}
