pub mod client;
pub mod model;

pub use client::{ApiError, ShipmentApi};
pub use model::{DeliveryConfirmation, ShipmentView};
