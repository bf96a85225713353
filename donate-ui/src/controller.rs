//! Donation form state and the submission lifecycle.
//!
//! ```text
//! Idle ──submit──▶ validate ──invalid──▶ Idle (field errors shown)
//!                     │
//!                   valid
//!                     ▼
//!                Submitting ──failure──▶ Idle (banner shown)
//!                     │
//!                  success
//!                     ▼
//!                Redirecting (terminal)
//! ```

use std::sync::Arc;

use donate_core::{
    Field, FieldRule, FormState, FormVariant, OrderRequest, PaymentGateway, ValidationErrors,
    applicable_rules, validate,
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::{
    logging::log_task_error,
    navigator::Navigator,
    notification::Notification,
    status_badge::{StatusBadge, probe_backend},
};

/// Shown when the backend rejects the order without saying why.
pub const PAYMENT_FAILED_MESSAGE: &str = "Failed to process payment.";
/// Shown for transport faults and unusable backend responses.
pub const PAYMENT_ERROR_MESSAGE: &str = "An error occurred while processing the payment.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{amount} is not a quick-select amount for the {variant} form")]
    UnknownPreset { amount: u32, variant: FormVariant },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Redirecting {
        url: String,
    },
}

/// Result of one call to [`DonationFormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The donor was handed to the payment gateway at this URL.
    Redirected(String),
    /// The order could not be created; the message is on the banner.
    Failed(String),
    /// A submission was already in flight or finished.
    Ignored,
}

pub struct DonationFormController {
    gateway: Arc<dyn PaymentGateway>,
    navigator: Box<dyn Navigator>,
    variant: FormVariant,
    form: FormState,
    tax_exemption: bool,
    errors: ValidationErrors,
    phase: SubmissionPhase,
    notification: Notification,
    badge: StatusBadge,
}

impl DonationFormController {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        navigator: Box<dyn Navigator>,
        variant: FormVariant,
    ) -> Self {
        Self {
            gateway,
            navigator,
            variant,
            form: FormState::new(),
            tax_exemption: false,
            errors: ValidationErrors::new(),
            phase: SubmissionPhase::Idle,
            notification: Notification::new(),
            badge: StatusBadge::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn tax_exemption(&self) -> bool {
        self.tax_exemption
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// True while an order request is in flight or the donor has been
    /// redirected; the form must not accept another submit.
    pub fn is_loading(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    pub fn badge(&self) -> &StatusBadge {
        &self.badge
    }

    /// Fields to render, in order, for the current tax-exemption choice.
    pub fn visible_rules(&self) -> Vec<&'static FieldRule> {
        applicable_rules(self.tax_exemption).collect()
    }

    /// The preset matching the current amount, if any.
    pub fn selected_preset(&self) -> Option<u32> {
        self.variant
            .presets()
            .iter()
            .copied()
            .find(|preset| self.form.amount == preset.to_string())
    }

    /// Stores `value` verbatim and clears any error previously shown for
    /// the field.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) {
        self.form.set(field, value);
        if self.errors.clear(field) {
            debug!(%field, "cleared field error on edit");
        }
    }

    pub fn select_predefined_amount(
        &mut self,
        amount: u32,
    ) -> Result<(), FormError> {
        if !self.variant.presets().contains(&amount) {
            return Err(FormError::UnknownPreset {
                amount,
                variant: self.variant,
            });
        }
        self.update_field(Field::Amount, amount.to_string());
        Ok(())
    }

    /// Toggles the 80G tax-exemption request.
    ///
    /// Turning it off keeps whatever PAN was typed so it reappears if the
    /// donor turns it back on, but the PAN is then neither validated nor
    /// sent.
    pub fn set_tax_exemption(
        &mut self,
        enabled: bool,
    ) {
        self.tax_exemption = enabled;
        if !enabled {
            self.errors.clear(Field::Pan);
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.form, self.tax_exemption)
    }

    /// Validates the form and, if it is clean, asks the backend for an
    /// order and hands the donor to the returned gateway URL.
    ///
    /// Every failure ends back in [`SubmissionPhase::Idle`] with a message
    /// on the notification banner. Dropping the returned future before the
    /// backend replies also returns the form to `Idle`, without a banner.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_loading() {
            debug!(phase = ?self.phase, "submit ignored while busy");
            return SubmitOutcome::Ignored;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            info!(fields = ?errors.fields(), "donation form has validation errors");
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }
        self.errors = ValidationErrors::new();

        let order = OrderRequest::from_form(&self.form, self.tax_exemption);
        debug!(amount = %order.amount, with_pan = order.pan.is_some(), "submitting order");

        let reply = {
            let in_flight = InFlight::enter(&mut self.phase);
            let reply = self.gateway.create_order(&order).await;
            in_flight.finish();
            reply
        };

        match reply {
            Ok(response) if response.success => match response.redirect_url() {
                Some(url) => {
                    let url = url.to_string();
                    info!(%url, "order created");
                    self.phase = SubmissionPhase::Redirecting { url: url.clone() };
                    self.navigator.navigate(&url);
                    SubmitOutcome::Redirected(url)
                }
                None => {
                    warn!("order succeeded without a redirect URL");
                    self.fail(PAYMENT_ERROR_MESSAGE)
                }
            },
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| PAYMENT_FAILED_MESSAGE.to_string());
                warn!(%message, "backend rejected order");
                self.fail(message)
            }
            Err(error) => {
                error!(%error, "order request failed");
                self.fail(PAYMENT_ERROR_MESSAGE)
            }
        }
    }

    /// Starts the one-shot backend probe that feeds [`Self::badge`].
    pub fn spawn_liveness_probe(&self) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        let badge = self.badge.clone();
        tokio::spawn(async move {
            log_task_error("liveness probe", probe_backend(gateway.as_ref(), &badge).await);
        })
    }

    fn fail(
        &mut self,
        message: impl Into<String>,
    ) -> SubmitOutcome {
        let message = message.into();
        self.phase = SubmissionPhase::Idle;
        self.notification.show(message.clone());
        SubmitOutcome::Failed(message)
    }
}

/// Holds the phase at `Submitting` for the lifetime of an order request.
///
/// Dropping it without [`InFlight::finish`] means the submit future was
/// cancelled mid-request, and the form goes back to `Idle`.
struct InFlight<'a> {
    phase: &'a mut SubmissionPhase,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn enter(phase: &'a mut SubmissionPhase) -> Self {
        *phase = SubmissionPhase::Submitting;
        Self {
            phase,
            finished: false,
        }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.phase == SubmissionPhase::Submitting {
            if !self.finished {
                warn!("order request cancelled before the backend replied");
            }
            *self.phase = SubmissionPhase::Idle;
        }
    }
}
