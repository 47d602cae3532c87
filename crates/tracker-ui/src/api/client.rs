//! HTTP client for the shipment backend.
//!
//! Two endpoints are consumed:
//! - `GET {base}/{shipmentId}` — read shipment status,
//! - `POST {base}/{shipmentId}/deliver?otp={otp}` — complete a delivery.

use crate::api::model::{DeliveryConfirmation, ShipmentView};
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Upper bound on a single backend call, so an unreachable backend is
/// reported in finite time. Native targets only; on wasm32 the browser's
/// fetch lifecycle bounds the call instead.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How a backend call can fail, as far as the UI cares.
///
/// Validation failures never reach this type; they are handled before a
/// request is built.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend was reachable but refused: a non-success status, or a success
    /// response whose body is missing required fields.
    #[error("backend rejected the request")]
    Rejection { status: Option<StatusCode> },
    /// Connection refused, DNS failure, timeout, or any other fault below
    /// the HTTP exchange.
    #[error("backend not reachable")]
    Transport(#[source] reqwest::Error),
}

fn classify(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        // A success response that does not match the typed schema is a
        // backend problem, not a transport one.
        ApiError::Rejection { status: err.status() }
    } else {
        ApiError::Transport(err)
    }
}

pub struct ShipmentApi {
    base_url: String,
    client: Client,
}

impl ShipmentApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: http_client(timeout),
        }
    }

    /// Reads the current state of a shipment. Any non-success status is
    /// reported as [`ApiError::Rejection`] (treated as "not found" upstream).
    pub async fn track(&self, shipment_id: &str) -> Result<ShipmentView, ApiError> {
        let url = format!("{}/{shipment_id}", self.base_url);
        let response = self.client.get(&url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            debug!("track {shipment_id}: backend answered {status}");
            return Err(ApiError::Rejection {
                status: Some(status),
            });
        }
        response.json().await.map_err(classify)
    }

    /// Marks a shipment delivered. The OTP travels as a query parameter and
    /// is never logged. Any non-success status is reported as
    /// [`ApiError::Rejection`] (invalid OTP or already delivered upstream).
    pub async fn deliver(
        &self,
        shipment_id: &str,
        otp: &str,
    ) -> Result<DeliveryConfirmation, ApiError> {
        let url = format!("{}/{shipment_id}/deliver", self.base_url);
        // Strip the URL from any error: it carries the OTP query parameter
        // and must not end up in logs.
        let response = self
            .client
            .post(&url)
            .query(&[("otp", otp)])
            .send()
            .await
            .map_err(|err| classify(err.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("deliver {shipment_id}: backend answered {status}");
            return Err(ApiError::Rejection {
                status: Some(status),
            });
        }
        response
            .json()
            .await
            .map_err(|err| classify(err.without_url()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("client configuration is static")
}

#[cfg(target_arch = "wasm32")]
fn http_client(_timeout: Duration) -> Client {
    Client::new()
}
