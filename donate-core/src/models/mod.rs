pub mod field;
pub mod form_state;
pub mod liveness;
pub mod order;
pub mod payment_status;
pub mod variant;

pub use field::{Field, UnknownFieldError};
pub use form_state::FormState;
pub use liveness::{HealthResponse, LivenessStatus};
pub use order::{InstrumentResponse, OrderData, OrderRequest, OrderResponse, RedirectInfo};
pub use payment_status::{PaymentInstrument, PaymentStatus, PaymentStatusData};
pub use variant::FormVariant;
