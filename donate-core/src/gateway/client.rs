use async_trait::async_trait;
use thiserror::Error;

use crate::models::{HealthResponse, OrderRequest, OrderResponse};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// The payment backend the donation form hands off to.
///
/// The backend owns order creation and issues the gateway redirect; the
/// form only needs these two calls.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Lightweight liveness check against the backend root.
    async fn health(&self) -> Result<HealthResponse, GatewayError>;

    /// Creates a payment order for the donor.
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderResponse, GatewayError>;
}
