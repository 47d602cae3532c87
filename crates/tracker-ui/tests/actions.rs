//! End-to-end tests of the Track and Deliver flows at the action layer:
//! field validation, the single backend call, and the outcome the result
//! panel renders.

use serde_json::json;
use tracker_ui::action::{
    self, MSG_BACKEND_UNREACHABLE, MSG_INVALID_OTP_OR_DELIVERED, MSG_MISSING_SHIPMENT_ID,
    MSG_MISSING_SHIPMENT_ID_OR_OTP, MSG_SHIPMENT_NOT_FOUND, Outcome,
};
use tracker_ui::api::ShipmentApi;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE_PATH: &str = "/api/shipments";

async fn api_for(server: &MockServer) -> ShipmentApi {
    ShipmentApi::new(format!("{}{BASE_PATH}", server.uri()))
}

/// Mock server that fails the test if the UI sends anything at all.
async fn server_expecting_no_calls() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn track_with_empty_id_warns_without_calling_the_backend() {
    let server = server_expecting_no_calls().await;
    let api = api_for(&server).await;

    let outcome = action::track(&api, "").await;
    assert_eq!(outcome, Outcome::Warning(MSG_MISSING_SHIPMENT_ID));

    // Whitespace-only counts as empty too.
    let outcome = action::track(&api, "   ").await;
    assert_eq!(outcome, Outcome::Warning(MSG_MISSING_SHIPMENT_ID));
}

#[tokio::test]
async fn deliver_with_a_missing_field_warns_without_calling_the_backend() {
    let server = server_expecting_no_calls().await;
    let api = api_for(&server).await;

    let outcome = action::deliver(&api, "", "1234").await;
    assert_eq!(outcome, Outcome::Warning(MSG_MISSING_SHIPMENT_ID_OR_OTP));

    let outcome = action::deliver(&api, "SHIP1", "").await;
    assert_eq!(outcome, Outcome::Warning(MSG_MISSING_SHIPMENT_ID_OR_OTP));

    let outcome = action::deliver(&api, "", "").await;
    assert_eq!(outcome, Outcome::Warning(MSG_MISSING_SHIPMENT_ID_OR_OTP));
}

#[tokio::test]
async fn track_renders_the_shipment_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/SHIP1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipmentId": "SHIP1",
            "status": "IN_TRANSIT",
            "customerName": "Ana",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = action::track(&api_for(&server).await, "SHIP1").await;
    let Outcome::TrackSuccess(view) = outcome else {
        panic!("expected a track success, got {outcome:?}");
    };
    assert_eq!(view.shipment_id, "SHIP1");
    assert_eq!(view.status, "IN_TRANSIT");
    assert_eq!(view.customer_name, "Ana");
}

#[tokio::test]
async fn track_reports_an_unknown_shipment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE_PATH}/SHIP2")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = action::track(&api_for(&server).await, "SHIP2").await;
    assert_eq!(outcome, Outcome::Error(MSG_SHIPMENT_NOT_FOUND));
}

#[tokio::test]
async fn deliver_renders_the_confirmation_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{BASE_PATH}/SHIP1/deliver")))
        .and(query_param("otp", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "DELIVERED",
            "deliveredAt": "2024-01-01T10:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = action::deliver(&api_for(&server).await, "SHIP1", "1234").await;
    let Outcome::DeliverSuccess(confirmation) = outcome else {
        panic!("expected a deliver success, got {outcome:?}");
    };
    assert_eq!(confirmation.status, "DELIVERED");
    assert_eq!(confirmation.delivered_at, "2024-01-01T10:00:00Z");
}

#[tokio::test]
async fn deliver_with_a_wrong_otp_shows_the_combined_error_without_echoing_the_otp() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{BASE_PATH}/SHIP1/deliver")))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let outcome = action::deliver(&api_for(&server).await, "SHIP1", "765432").await;
    assert_eq!(outcome, Outcome::Error(MSG_INVALID_OTP_OR_DELIVERED));
    assert!(!format!("{outcome:?}").contains("765432"));
}

#[tokio::test]
async fn both_actions_collapse_transport_failures_to_one_message() {
    // Bind then drop a listener so the port is known to refuse connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let api = ShipmentApi::new(format!("http://127.0.0.1:{port}{BASE_PATH}"));

    let outcome = action::track(&api, "SHIP1").await;
    assert_eq!(outcome, Outcome::Error(MSG_BACKEND_UNREACHABLE));

    let outcome = action::deliver(&api, "SHIP1", "1234").await;
    assert_eq!(outcome, Outcome::Error(MSG_BACKEND_UNREACHABLE));
}
