//! REST API helpers for the restaurants backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages render the error inline
//! instead of panicking, so a failed fetch never breaks hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True for a 404 from the backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn restaurants_endpoint() -> String {
    crate::config::api_url("/restaurants")
}

#[cfg(any(test, feature = "hydrate"))]
fn restaurant_endpoint(id: u64) -> String {
    crate::config::api_url(&format!("/restaurants/{id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn pizzas_endpoint() -> String {
    crate::config::api_url("/pizzas")
}

#[cfg(any(test, feature = "hydrate"))]
fn restaurant_pizzas_endpoint() -> String {
    crate::config::api_url("/restaurant_pizzas")
}

/// Build the error for a non-OK status, preferring the backend's message.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: Option<&ErrorBody>) -> ApiError {
    let message = body
        .and_then(ErrorBody::message)
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: &gloo_net::http::Response) -> ApiError {
    let body = resp.json::<ErrorBody>().await.ok();
    status_error(resp.status(), body.as_ref())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from_response(&resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

/// Fetch all restaurants from `GET /restaurants`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_restaurants() -> Result<Vec<Restaurant>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&restaurants_endpoint())
            .await
            .inspect_err(|e| log::warn!("fetch restaurants failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one restaurant with its pizzas from `GET /restaurants/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`]; a missing restaurant is a 404 `Status` error.
pub async fn fetch_restaurant(id: u64) -> Result<Restaurant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&restaurant_endpoint(id))
            .await
            .inspect_err(|e| log::warn!("fetch restaurant {id} failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Delete a restaurant via `DELETE /restaurants/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the backend rejects it.
pub async fn delete_restaurant(id: u64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&restaurant_endpoint(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let err = error_from_response(&resp).await;
            log::warn!("delete restaurant {id} failed: {err}");
            return Err(err);
        }
        log::info!("deleted restaurant {id}");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the pizza catalogue from `GET /pizzas`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_pizzas() -> Result<Vec<Pizza>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&pizzas_endpoint())
            .await
            .inspect_err(|e| log::warn!("fetch pizzas failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Add a pizza to a restaurant's menu via `POST /restaurant_pizzas`.
///
/// # Errors
///
/// Returns [`ApiError`]; validation failures carry the backend's messages.
pub async fn create_restaurant_pizza(new: &NewRestaurantPizza) -> Result<RestaurantPizza, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&restaurant_pizzas_endpoint())
            .json(new)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp)
            .await
            .inspect_err(|e| log::warn!("create restaurant pizza failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new;
        Err(ApiError::Unavailable)
    }
}
