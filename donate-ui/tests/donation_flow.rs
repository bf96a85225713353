//! End-to-end runs of the donation form against a mock payment backend,
//! going through the real HTTP gateway.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use donate_core::{Field, FormVariant, GatewayConfig, LivenessStatus};
use donate_http::HttpGateway;
use donate_ui::controller::PAYMENT_ERROR_MESSAGE;
use donate_ui::{DonationFormController, Navigator, SubmissionPhase, SubmitOutcome, view};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct CapturedRedirects(Arc<Mutex<Vec<String>>>);

impl Navigator for CapturedRedirects {
    fn navigate(&self, url: &str) {
        self.0.lock().unwrap().push(url.to_string());
    }
}

fn controller_for(
    server: &MockServer,
    timeout: Duration,
) -> (DonationFormController, CapturedRedirects) {
    let config = GatewayConfig::new(server.uri()).with_timeout(timeout);
    let gateway = HttpGateway::new(config).expect("client should build");
    let redirects = CapturedRedirects::default();
    let mut controller = DonationFormController::new(
        Arc::new(gateway),
        Box::new(redirects.clone()),
        FormVariant::Hero,
    );
    controller.update_field(Field::Name, "Asha Rao");
    controller.update_field(Field::Email, "asha@example.org");
    controller.update_field(Field::Phone, "9876543210");
    (controller, redirects)
}

async fn mount_order(
    server: &MockServer,
    response: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(path("/order"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn success_navigates_to_gateway_url() {
    let server = MockServer::start().await;
    mount_order(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "instrumentResponse": { "redirectInfo": { "url": "https://pay.example/x" } } }
        })),
    )
    .await;
    let (mut controller, redirects) = controller_for(&server, Duration::from_secs(5));
    controller.select_predefined_amount(5000).unwrap();

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Redirected("https://pay.example/x".to_string())
    );
    assert_eq!(
        *redirects.0.lock().unwrap(),
        vec!["https://pay.example/x".to_string()]
    );
    assert_eq!(controller.notification().message(), None);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["amount"], "5000");
    assert!(body.get("pan").is_none());
}

#[tokio::test]
async fn declined_order_shows_backend_message() {
    let server = MockServer::start().await;
    mount_order(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "success": false, "message": "Card declined" })),
    )
    .await;
    let (mut controller, redirects) = controller_for(&server, Duration::from_secs(5));

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed("Card declined".to_string()));
    assert_eq!(
        controller.notification().message().as_deref(),
        Some("Card declined")
    );
    assert!(!controller.is_loading());
    assert!(redirects.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn server_error_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    mount_order(&server, ResponseTemplate::new(500)).await;
    let (mut controller, _) = controller_for(&server, Duration::from_secs(5));

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(PAYMENT_ERROR_MESSAGE.to_string())
    );
    assert_eq!(controller.phase(), &SubmissionPhase::Idle);
}

#[tokio::test]
async fn timeout_clears_loading_state() {
    let server = MockServer::start().await;
    mount_order(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "success": true }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    let (mut controller, _) = controller_for(&server, Duration::from_millis(100));

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(PAYMENT_ERROR_MESSAGE.to_string())
    );
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn invalid_form_sends_nothing() {
    let server = MockServer::start().await;
    mount_order(&server, ResponseTemplate::new(200)).await;
    let (mut controller, _) = controller_for(&server, Duration::from_secs(5));
    controller.update_field(Field::Phone, "12345");
    controller.set_tax_exemption(true);

    let outcome = controller.submit().await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors, got {outcome:?}");
    };
    assert_eq!(errors.fields(), vec![Field::Phone, Field::Pan]);
    assert!(server.received_requests().await.unwrap().is_empty());

    let screen = view::FormScreen(&controller).to_string();
    assert!(screen.contains("  ! Mobile number must be 10 digits\n"));
    assert!(screen.contains("  ! PAN Number is required for tax exemption\n"));
    assert!(screen.contains("  Quick select: [₹100]  ₹500  ₹1,000  ₹5,000  ₹10,000\n"));
}

#[tokio::test]
async fn liveness_probe_reports_offline_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let (controller, _) = controller_for(&server, Duration::from_secs(5));

    controller.spawn_liveness_probe().await.unwrap();

    assert_eq!(controller.badge().status(), LivenessStatus::Error);
    assert!(view::FormScreen(&controller).to_string().ends_with("System: Offline\n"));
}

#[tokio::test]
async fn abandoned_submit_can_be_retried() {
    let server = MockServer::start().await;
    mount_order(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_secs(2))
            .set_body_json(json!({
                "success": true,
                "data": { "instrumentResponse": { "redirectInfo": { "url": "https://pay.example/late" } } }
            })),
    )
    .await;
    let (mut controller, redirects) = controller_for(&server, Duration::from_secs(5));

    let abandoned = tokio::time::timeout(Duration::from_millis(100), controller.submit()).await;
    assert!(abandoned.is_err());
    assert_eq!(controller.phase(), &SubmissionPhase::Idle);
    assert!(!controller.is_loading());

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Redirected("https://pay.example/late".to_string())
    );
    assert_eq!(
        *redirects.0.lock().unwrap(),
        vec!["https://pay.example/late".to_string()]
    );
}
