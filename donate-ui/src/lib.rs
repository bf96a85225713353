pub mod config;
pub mod controller;
pub mod logging;
pub mod navigator;
pub mod notification;
pub mod prompt;
pub mod receipt;
pub mod status_badge;
pub mod view;

pub use config::{AppConfig, ConfigError};
pub use controller::{DonationFormController, FormError, SubmissionPhase, SubmitOutcome};
pub use navigator::{Navigator, TerminalNavigator};
pub use notification::Notification;
pub use status_badge::StatusBadge;
