use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use donate_core::{
    GatewayConfig, GatewayError, HealthResponse, OrderRequest, OrderResponse, PaymentGateway,
};

/// [`PaymentGateway`] that talks JSON over HTTP to the donation backend.
///
/// ```rust,no_run
/// use donate_core::GatewayConfig;
/// use donate_http::HttpGateway;
///
/// let gateway = HttpGateway::new(GatewayConfig::new("http://localhost:3000"))?;
/// # Ok::<(), donate_core::GatewayError>(())
/// ```
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PaymentGateway for HttpGateway {
    async fn health(&self) -> Result<HealthResponse, GatewayError> {
        let url = self.config.endpoint("/");
        debug!(%url, "probing backend");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_request_error)?;
        decode_json(response).await
    }

    async fn create_order(&self, order: &OrderRequest) -> Result<OrderResponse, GatewayError> {
        let url = self.config.endpoint("/order");
        debug!(%url, amount = %order.amount, "creating order");
        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(map_request_error)?;
        decode_json(response).await
    }
}

fn map_request_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(error.to_string())
    }
}

/// Rejects non-2xx responses, then parses the body as `T`.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "backend returned error status");
        return Err(GatewayError::Status(status.as_u16()));
    }
    let body = response.bytes().await.map_err(map_request_error)?;
    serde_json::from_slice(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}
