pub mod amount;
pub mod gateway;
pub mod models;
pub mod validation;

pub use gateway::{GatewayConfig, GatewayError, PaymentGateway};
pub use models::*;
pub use validation::{FieldRule, InputType, ValidationErrors, applicable_rules, validate};
