use serde::Deserialize;

/// Shipment as returned by the tracking endpoint.
///
/// Read-only reflection of the last successful backend response; the UI never
/// mutates it, a new response replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentView {
    pub shipment_id: String,
    pub status: String, // backend-defined, e.g. "PENDING", "IN_TRANSIT", "DELIVERED"
    pub customer_name: String,
}

/// Delivery endpoint response (only the fields the UI renders).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryConfirmation {
    pub status: String,
    pub delivered_at: String,
}
