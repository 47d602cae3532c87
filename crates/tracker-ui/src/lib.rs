pub mod action;
pub mod api;
pub mod app;
pub mod components;
pub mod util;

/// Root URL prefix for shipment resources.
///
/// Overridable at build time with the `API_BASE` environment variable, e.g.
/// `API_BASE=http://localhost:8080/api/shipments trunk build`.
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(base) => base,
    None => "/api/shipments",
};
