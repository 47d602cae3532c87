//! The per-action flow behind the two buttons: validate the form fields,
//! issue at most one backend call, and reduce the result to an [`Outcome`]
//! for the result panel.
//!
//! Kept free of any DOM types so the whole flow can be driven by native
//! integration tests.

use crate::api::{ApiError, DeliveryConfirmation, ShipmentApi, ShipmentView};
use log::{debug, error};

pub const MSG_MISSING_SHIPMENT_ID: &str = "Please enter Shipment ID";
pub const MSG_MISSING_SHIPMENT_ID_OR_OTP: &str = "Enter Shipment ID and OTP";
pub const MSG_SHIPMENT_NOT_FOUND: &str = "Shipment not found";
pub const MSG_INVALID_OTP_OR_DELIVERED: &str = "Invalid OTP or already delivered";
pub const MSG_BACKEND_UNREACHABLE: &str = "Backend not reachable";

/// What the result panel shows after an action completes. Exactly one
/// outcome is rendered at a time; a new one replaces the previous panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A required field was empty; no request was issued.
    Warning(&'static str),
    TrackSuccess(ShipmentView),
    DeliverSuccess(DeliveryConfirmation),
    Error(&'static str),
}

/// Track action: read the shipment and reduce the response.
pub async fn track(api: &ShipmentApi, shipment_id: &str) -> Outcome {
    let shipment_id = shipment_id.trim();
    if shipment_id.is_empty() {
        return Outcome::Warning(MSG_MISSING_SHIPMENT_ID);
    }
    match api.track(shipment_id).await {
        Ok(view) => {
            debug!("track {shipment_id}: {}", view.status);
            Outcome::TrackSuccess(view)
        }
        Err(ApiError::Rejection { status }) => {
            debug!("track {shipment_id}: rejected ({status:?})");
            Outcome::Error(MSG_SHIPMENT_NOT_FOUND)
        }
        Err(err @ ApiError::Transport(_)) => {
            error!("track {shipment_id}: {err:?}");
            Outcome::Error(MSG_BACKEND_UNREACHABLE)
        }
    }
}

/// Deliver action: complete the delivery with the given OTP.
///
/// The OTP is a secret: it is passed through to the backend and never logged
/// or included in the returned outcome.
pub async fn deliver(api: &ShipmentApi, shipment_id: &str, otp: &str) -> Outcome {
    let shipment_id = shipment_id.trim();
    let otp = otp.trim();
    if shipment_id.is_empty() || otp.is_empty() {
        return Outcome::Warning(MSG_MISSING_SHIPMENT_ID_OR_OTP);
    }
    match api.deliver(shipment_id, otp).await {
        Ok(confirmation) => {
            debug!("deliver {shipment_id}: {}", confirmation.status);
            Outcome::DeliverSuccess(confirmation)
        }
        Err(ApiError::Rejection { status }) => {
            // Invalid OTP and already-delivered are indistinguishable here.
            debug!("deliver {shipment_id}: rejected ({status:?})");
            Outcome::Error(MSG_INVALID_OTP_OR_DELIVERED)
        }
        Err(err @ ApiError::Transport(_)) => {
            error!("deliver {shipment_id}: {err:?}");
            Outcome::Error(MSG_BACKEND_UNREACHABLE)
        }
    }
}
