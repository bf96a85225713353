//! HTTP implementation of [`donate_core::PaymentGateway`].

mod gateway;

pub use gateway::HttpGateway;
