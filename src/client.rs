//! HTTP client for the card REST API.
//!
//! Thin wrapper over `reqwest`. Every call maps transport, status and decode
//! failures onto the shared [`ApiError`] so callers can branch on 404/409 the
//! same way the browser app does.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::time::Duration;

use cards::routes;
use cards::{
    ApiError, Card, Drawing, DrawingPatch, ItemId, ItemKind, Message, MessagePatch, NewCard, NewDrawing, NewMessage,
    WrappedData,
};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct CardClient {
    http: reqwest::Client,
    base: String,
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl CardClient {
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub fn new(base: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(transport)?;
        Ok(Self { http, base: base.into() })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = routes::join(&self.base, path);
        tracing::debug!(%method, %url, "card api request");
        self.http.request(method, url)
    }

    /// Endpoint for adding an item, with the recipient name when known.
    fn add_request(&self, card_id: &str, kind: ItemKind, recipient: Option<&str>) -> RequestBuilder {
        let request = self.request(Method::POST, &routes::items(card_id, kind));
        match recipient.map(str::trim).filter(|r| !r.is_empty()) {
            Some(name) => request.query(&[(routes::RECIPIENT_NAME_QUERY, name)]),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        Self::check(request.send().await.map_err(transport)?).await
    }

    /// Turn a non-2xx answer into a status error carrying the body text.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "card api error");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let text = response.text().await.map_err(transport)?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        request: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        Self::decode(Self::send(request.json(body)).await?).await
    }

    /// Send a body and ignore whatever the server answers with.
    async fn send_json_unit<B: Serialize + ?Sized>(request: RequestBuilder, body: &B) -> Result<(), ApiError> {
        Self::send(request.json(body)).await.map(|_| ())
    }

    /// Create a card, or persist the recipient of an existing one.
    ///
    /// # Errors
    ///
    /// A 409 status means the id is already taken.
    pub async fn create_card(&self, card: &NewCard) -> Result<Card, ApiError> {
        Self::send_json(self.request(Method::POST, &routes::cards()), card).await
    }

    /// Fetch a card. A missing card is `Ok(None)`, not an error, whether the
    /// server answers 404 or a `null` body.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or decode failure.
    pub async fn get_card(&self, id: &str) -> Result<Option<Card>, ApiError> {
        let response = self.request(Method::GET, &routes::card(id)).send().await.map_err(transport)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode::<Option<Card>>(Self::check(response).await?).await
    }

    /// # Errors
    ///
    /// Returns the transport, status or decode failure.
    pub async fn add_message(
        &self,
        card_id: &str,
        message: &NewMessage,
        recipient: Option<&str>,
    ) -> Result<Message, ApiError> {
        Self::send_json(self.add_request(card_id, ItemKind::Message, recipient), message).await
    }

    /// # Errors
    ///
    /// Returns the transport or status failure.
    pub async fn update_message(&self, card_id: &str, id: ItemId, patch: &MessagePatch) -> Result<(), ApiError> {
        let request = self.request(Method::PATCH, &routes::item(card_id, ItemKind::Message, id));
        Self::send_json_unit(request, patch).await
    }

    /// # Errors
    ///
    /// Returns the transport, status or decode failure.
    pub async fn add_drawing(
        &self,
        card_id: &str,
        drawing: &NewDrawing,
        recipient: Option<&str>,
    ) -> Result<Drawing, ApiError> {
        Self::send_json(self.add_request(card_id, ItemKind::Drawing, recipient), drawing).await
    }

    /// # Errors
    ///
    /// Returns the transport or status failure.
    pub async fn update_drawing(&self, card_id: &str, id: ItemId, patch: &DrawingPatch) -> Result<(), ApiError> {
        let request = self.request(Method::PATCH, &routes::item(card_id, ItemKind::Drawing, id));
        Self::send_json_unit(request, patch).await
    }

    /// Delete a message or drawing.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure.
    pub async fn delete_item(&self, card_id: &str, kind: ItemKind, id: ItemId) -> Result<(), ApiError> {
        Self::send(self.request(Method::DELETE, &routes::item(card_id, kind, id))).await.map(|_| ())
    }

    /// Replace the card's wrapped customization.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure.
    pub async fn update_wrapped(&self, card_id: &str, wrapped: &WrappedData) -> Result<(), ApiError> {
        Self::send_json_unit(self.request(Method::PATCH, &routes::wrapped(card_id)), wrapped).await
    }
}
