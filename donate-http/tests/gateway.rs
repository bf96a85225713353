//! Exercises [`HttpGateway`] against a mock backend.

use std::time::Duration;

use donate_core::{GatewayConfig, GatewayError, OrderRequest, PaymentGateway};
use donate_http::HttpGateway;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(GatewayConfig::new(server.uri())).expect("client should build")
}

fn order() -> OrderRequest {
    OrderRequest {
        name: "Asha Rao".to_string(),
        email: "asha@example.org".to_string(),
        phone: "9876543210".to_string(),
        amount: "500".to_string(),
        pan: None,
    }
}

#[tokio::test]
async fn health_decodes_alive_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "alive": true, "commitVersion": "1a2b3c4d" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let health = gateway_for(&server).health().await.unwrap();
    assert!(health.alive);
    assert_eq!(health.version_fragment().as_deref(), Some("c4d"));
}

#[tokio::test]
async fn health_maps_server_error_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = gateway_for(&server).health().await.unwrap_err();
    assert!(matches!(err, GatewayError::Status(503)), "got {err:?}");
}

#[tokio::test]
async fn create_order_posts_form_and_returns_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .and(body_json(json!({
            "name": "Asha Rao",
            "email": "asha@example.org",
            "phone": "9876543210",
            "amount": "500",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "instrumentResponse": { "redirectInfo": { "url": "https://pay.example/x" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway_for(&server).create_order(&order()).await.unwrap();
    assert!(response.success);
    assert_eq!(response.redirect_url(), Some("https://pay.example/x"));
}

#[tokio::test]
async fn create_order_passes_application_failure_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "Card declined" })),
        )
        .mount(&server)
        .await;

    let response = gateway_for(&server).create_order(&order()).await.unwrap();
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Card declined"));
}

#[tokio::test]
async fn create_order_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = gateway_for(&server).create_order(&order()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = GatewayConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let gateway = HttpGateway::new(config).unwrap();
    let err = gateway.create_order(&order()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let gateway = HttpGateway::new(GatewayConfig::new(uri)).unwrap();
    let err = gateway.health().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)), "got {err:?}");
}
