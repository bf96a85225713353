//! Plain-text rendering of the donation screen.

use std::fmt;

use donate_core::{FormVariant, InputType, amount::format_whole};

use crate::controller::DonationFormController;

pub const MAINTENANCE_NOTICE: &str = "Donations are temporarily unavailable while we carry out \
scheduled maintenance. Please check back shortly.";

pub const TAX_EXEMPTION_QUESTION: &str = "Do you need 80G Tax Exemption?";
const PAN_NOTICE: &str = "PAN number is mandatory for 80G exemption.";

/// `₹5,000`
pub fn preset_label(amount: u32) -> String {
    format!("₹{}", format_whole(u64::from(amount)))
}

/// Quick-select row with the current choice bracketed.
pub fn render_presets(
    variant: FormVariant,
    selected: Option<u32>,
) -> String {
    variant
        .presets()
        .iter()
        .map(|&amount| {
            let label = preset_label(amount);
            if selected == Some(amount) {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Full form snapshot: fields with inline errors, presets, banner and
/// backend status.
pub struct FormScreen<'a>(pub &'a DonationFormController);

impl fmt::Display for FormScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controller = self.0;
        let form = controller.form();
        let errors = controller.errors();

        writeln!(f, "{}", controller.variant().heading())?;
        writeln!(
            f,
            "{TAX_EXEMPTION_QUESTION} {}",
            if controller.tax_exemption() { "Yes" } else { "No" }
        )?;
        if controller.tax_exemption() {
            writeln!(f, "  {PAN_NOTICE}")?;
        }

        for rule in controller.visible_rules() {
            let value = form.get(rule.field);
            let shown = if value.is_empty() { rule.placeholder } else { value };
            writeln!(f, "{:<24}{}", rule.label, shown)?;
            if let Some(message) = errors.get(rule.field) {
                writeln!(f, "  ! {message}")?;
            }
            if rule.input_type == InputType::Number {
                writeln!(
                    f,
                    "  Quick select: {}",
                    render_presets(controller.variant(), controller.selected_preset())
                )?;
            }
        }

        if let Some(message) = controller.notification().message() {
            writeln!(f, "\nError: {message}")?;
        }
        writeln!(f, "\n{}", controller.badge())
    }
}
