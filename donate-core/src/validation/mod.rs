//! Field rules and validation for the donation form.
//!
//! Validation is a pure function of the form values and the
//! tax-exemption flag. The flag decides which rules apply before any rule
//! runs, so the PAN rule itself never needs to know about it.

pub mod errors;
pub mod rules;

pub use errors::ValidationErrors;
pub use rules::{FIELD_RULES, FieldRule, InputType, applicable_rules};

use tracing::debug;

use crate::models::FormState;

/// Runs every applicable rule over `form` and collects the failures.
///
/// An empty result means the form may be submitted.
pub fn validate(
    form: &FormState,
    tax_exemption: bool,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in applicable_rules(tax_exemption) {
        if let Some(message) = (rule.validate)(form) {
            errors.insert(rule.field, message);
        }
    }
    debug!(invalid = errors.len(), tax_exemption, "form validated");
    errors
}
