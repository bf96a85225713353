pub mod client;
pub mod config;

pub use client::{GatewayError, PaymentGateway};
pub use config::GatewayConfig;
