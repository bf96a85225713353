//! Interactive terminal front end for the donation form.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use donate_core::{FieldRule, InputType};
use tokio::task;
use tracing::debug;

use crate::{
    controller::{DonationFormController, SubmitOutcome},
    view::{self, FormScreen, TAX_EXEMPTION_QUESTION},
};

const OTHER_AMOUNT: &str = "Other amount";

/// Walks the donor through the form until the order is handed to the
/// gateway or the donor gives up after a failure.
///
/// Terminal prompts block, so they run inside
/// [`tokio::task::block_in_place`] and only the order request is awaited.
/// This needs the multi-threaded runtime.
pub async fn run_interactive(controller: &mut DonationFormController) -> Result<SubmitOutcome> {
    let theme = ColorfulTheme::default();
    println!("{}\n", controller.variant().heading());

    loop {
        task::block_in_place(|| collect_details(controller, &theme))?;

        println!("\n{}", controller.badge());
        match controller.submit().await {
            SubmitOutcome::Invalid(_) => {
                println!("\n{}", FormScreen(controller));
                println!("Please correct the highlighted fields.\n");
            }
            SubmitOutcome::Failed(message) => {
                println!("\nError: {message}\n");
                let retry = task::block_in_place(|| {
                    Confirm::with_theme(&theme)
                        .with_prompt("Try again?")
                        .default(true)
                        .interact()
                })?;
                controller.dismiss_notification();
                if !retry {
                    return Ok(SubmitOutcome::Failed(message));
                }
            }
            outcome => return Ok(outcome),
        }
    }
}

/// One pass over the exemption question and every visible field.
fn collect_details(
    controller: &mut DonationFormController,
    theme: &ColorfulTheme,
) -> Result<()> {
    let tax_exemption = Confirm::with_theme(theme)
        .with_prompt(TAX_EXEMPTION_QUESTION)
        .default(controller.tax_exemption())
        .interact()?;
    controller.set_tax_exemption(tax_exemption);

    for rule in controller.visible_rules() {
        match rule.input_type {
            InputType::Number => prompt_amount(controller, rule, theme)?,
            InputType::Text | InputType::Email | InputType::Tel => {
                prompt_text(controller, rule, theme)?
            }
        }
    }
    Ok(())
}

fn prompt_text(
    controller: &mut DonationFormController,
    rule: &FieldRule,
    theme: &ColorfulTheme,
) -> Result<()> {
    let value: String = Input::with_theme(theme)
        .with_prompt(field_prompt(controller, rule))
        .with_initial_text(controller.form().get(rule.field))
        .allow_empty(true)
        .interact_text()?;
    controller.update_field(rule.field, value);
    Ok(())
}

/// Quick-select list for a numeric field, with free entry as the last
/// choice.
fn prompt_amount(
    controller: &mut DonationFormController,
    rule: &FieldRule,
    theme: &ColorfulTheme,
) -> Result<()> {
    let presets = controller.variant().presets();
    let mut items: Vec<String> = presets.iter().map(|&a| view::preset_label(a)).collect();
    items.push(OTHER_AMOUNT.to_string());

    let current = controller
        .selected_preset()
        .and_then(|p| presets.iter().position(|&a| a == p))
        .unwrap_or(presets.len());

    let choice = Select::with_theme(theme)
        .with_prompt(field_prompt(controller, rule))
        .items(&items)
        .default(current)
        .interact()?;

    match presets.get(choice) {
        Some(&amount) => {
            debug!(amount, "quick amount selected");
            controller.select_predefined_amount(amount)?;
        }
        None => prompt_text(controller, rule, theme)?,
    }
    Ok(())
}

/// Field label, followed by the current error when there is one.
fn field_prompt(
    controller: &DonationFormController,
    rule: &FieldRule,
) -> String {
    match controller.errors().get(rule.field) {
        Some(error) => format!("{} ({error})", rule.label),
        None => rule.label.to_string(),
    }
}
