//! REST helpers for the card backend.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning a transport error, since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx answers carry the status
//! and response text so pages can branch on 404/409 without string matching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use cards::{
    ApiError, Card, Drawing, ItemId, ItemKind, ItemPatch, Message, NewCard, NewDrawing, NewMessage, WrappedData,
};
use cards::routes;

/// API base, overridable at build time with `SCRIBL_API_URL`.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("SCRIBL_API_URL").unwrap_or(routes::DEFAULT_API_BASE)
}

fn endpoint(path: &str) -> String {
    routes::join(api_base(), path)
}

/// Endpoint for adding an item, with the recipient name when known.
fn items_url(card_id: &str, kind: ItemKind, recipient: Option<&str>) -> String {
    let url = endpoint(&routes::items(card_id, kind));
    match recipient.map(str::trim).filter(|r| !r.is_empty()) {
        Some(name) => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair(routes::RECIPIENT_NAME_QUERY, name)
                .finish();
            format!("{url}?{query}")
        }
        None => url,
    }
}

fn item_url(card_id: &str, kind: ItemKind, item_id: ItemId) -> String {
    endpoint(&routes::item(card_id, kind, item_id))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
mod http {
    use cards::ApiError;
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    pub(super) fn transport(err: gloo_net::Error) -> ApiError {
        ApiError::Transport(err.to_string())
    }

    /// Turn a non-2xx answer into a status error carrying the body text.
    pub(super) async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn send_json<B: Serialize, T: DeserializeOwned>(
        request: Request,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = request.json(body).map_err(transport)?;
        let resp = resp.send().await.map_err(transport)?;
        decode(check(resp).await?).await
    }

    /// Send a body and ignore whatever the server answers with.
    pub(super) async fn send_json_unit<B: Serialize>(request: Request, body: &B) -> Result<(), ApiError> {
        let resp = request.json(body).map_err(transport)?.send().await.map_err(transport)?;
        check(resp).await.map(|_| ())
    }
}

/// Create a card, or persist the recipient of an existing one.
///
/// # Errors
///
/// A 409 status means the id is already taken.
pub async fn create_card(id: &str, creator_name: &str, recipient_name: &str) -> Result<Card, ApiError> {
    let body = NewCard {
        id: id.to_owned(),
        creator_name: creator_name.to_owned(),
        recipient_name: recipient_name.to_owned(),
    };
    #[cfg(feature = "csr")]
    {
        http::send_json(gloo_net::http::Request::post(&endpoint(&routes::cards())), &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Err(unavailable())
    }
}

/// Fetch a card. A missing card is `Ok(None)`, not an error.
///
/// # Errors
///
/// Returns the transport, status or decode failure.
pub async fn get_card(id: &str) -> Result<Option<Card>, ApiError> {
    let url = endpoint(&routes::card(id));
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(http::transport)?;
        if resp.status() == 404 {
            return Ok(None);
        }
        http::decode(http::check(resp).await?).await.map(Some)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(unavailable())
    }
}

/// Add a message, naming the recipient so the backend can create the card.
///
/// # Errors
///
/// Returns the transport, status or decode failure.
pub async fn add_message(card_id: &str, message: &NewMessage, recipient: Option<&str>) -> Result<Message, ApiError> {
    let url = items_url(card_id, ItemKind::Message, recipient);
    #[cfg(feature = "csr")]
    {
        http::send_json(gloo_net::http::Request::post(&url), message).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, message);
        Err(unavailable())
    }
}

/// Add a drawing, naming the recipient so the backend can create the card.
///
/// # Errors
///
/// Returns the transport, status or decode failure.
pub async fn add_drawing(card_id: &str, drawing: &NewDrawing, recipient: Option<&str>) -> Result<Drawing, ApiError> {
    let url = items_url(card_id, ItemKind::Drawing, recipient);
    #[cfg(feature = "csr")]
    {
        http::send_json(gloo_net::http::Request::post(&url), drawing).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, drawing);
        Err(unavailable())
    }
}

/// Send a sparse update for a message or drawing.
///
/// # Errors
///
/// Returns the transport or status failure.
pub async fn update_item(card_id: &str, item_id: ItemId, patch: &ItemPatch) -> Result<(), ApiError> {
    let url = item_url(card_id, patch.kind(), item_id);
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::patch(&url);
        match patch {
            ItemPatch::Message(body) => http::send_json_unit(request, body).await,
            ItemPatch::Drawing(body) => http::send_json_unit(request, body).await,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(unavailable())
    }
}

/// Delete a message or drawing.
///
/// # Errors
///
/// Returns the transport or status failure.
pub async fn delete_item(card_id: &str, kind: ItemKind, item_id: ItemId) -> Result<(), ApiError> {
    let url = item_url(card_id, kind, item_id);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&url).send().await.map_err(http::transport)?;
        http::check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(unavailable())
    }
}

/// Replace the card's wrapped customization.
///
/// # Errors
///
/// Returns the transport or status failure.
pub async fn update_wrapped(card_id: &str, wrapped: &WrappedData) -> Result<(), ApiError> {
    let url = endpoint(&routes::wrapped(card_id));
    #[cfg(feature = "csr")]
    {
        http::send_json_unit(gloo_net::http::Request::patch(&url), wrapped).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, wrapped);
        Err(unavailable())
    }
}
