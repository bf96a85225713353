//! Text receipts for a completed or failed payment.

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use donate_core::{
    PaymentStatus,
    amount::{format_grouped, format_inr},
};

const THANK_YOU: &str = "Dear Donor, thank you for your generous contribution. \
Your support helps us make a real difference in society.";
const DEFAULT_FAILURE_REASON: &str = "Your payment was unsuccessful due to a technical issue \
or was declined by the bank.";
const REFUND_NOTE: &str = "If your account has been debited, the amount is usually refunded \
by your bank within 5-7 business days.";

/// Reads a payment-status JSON document from disk.
pub fn load_status(path: &Path) -> Result<PaymentStatus> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read payment status: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse payment status: {}", path.display()))
}

/// Renders the receipt matching the payment outcome.
pub fn render(
    status: &PaymentStatus,
    status_base_url: &str,
) -> String {
    if status.success {
        SuccessReceipt(status).to_string()
    } else {
        FailureReceipt {
            status,
            status_base_url,
        }
        .to_string()
    }
}

pub struct SuccessReceipt<'a>(pub &'a PaymentStatus);

impl fmt::Display for SuccessReceipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = &self.0.data;
        writeln!(f, "Payment Successful")?;
        writeln!(f, "₹ {}", format_grouped(data.amount))?;
        writeln!(f)?;
        if let Some(created_at) = data.created_at {
            row(f, "Date & Time", &created_at.format("%d %b %Y, %I:%M %P").to_string())?;
        }
        row(f, "Ref. Number", &data.merchant_transaction_id)?;
        if let Some(transaction_id) = &data.transaction_id {
            row(f, "Transaction ID", transaction_id)?;
        }
        if let Some(instrument) = &data.payment_instrument {
            row(f, "Payment Method", &instrument.kind)?;
            if let Some((label, value)) = instrument.reference() {
                row(f, label, &value)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "\"{THANK_YOU}\"")?;
        writeln!(f, "A copy of this receipt has been sent to your email.")
    }
}

pub struct FailureReceipt<'a> {
    pub status: &'a PaymentStatus,
    pub status_base_url: &'a str,
}

impl FailureReceipt<'_> {
    /// Public page where the donor can re-check the payment later.
    pub fn status_url(&self) -> String {
        format!(
            "{}/{}",
            self.status_base_url.trim_end_matches('/'),
            self.status.data.merchant_transaction_id
        )
    }

    pub fn reason(&self) -> &str {
        self.status
            .data
            .response_code_description
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FAILURE_REASON)
    }
}

impl fmt::Display for FailureReceipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = &self.status.data;
        writeln!(f, "We couldn't process your contribution.")?;
        writeln!(f, "{}", self.reason())?;
        writeln!(f)?;
        row(f, "Amount", &format_inr(data.amount))?;
        row(f, "Ref. Number", &data.merchant_transaction_id)?;
        if !self.status.message.is_empty() {
            row(f, "Status", &self.status.message)?;
        }
        writeln!(f)?;
        writeln!(f, "Note: {REFUND_NOTE}")?;
        writeln!(f, "Check the latest status at {}", self.status_url())
    }
}

fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &str,
) -> fmt::Result {
    writeln!(f, "{label:<16}{value}")
}
