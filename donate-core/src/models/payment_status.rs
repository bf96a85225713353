use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Payment status delivered after the gateway redirects the donor back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    pub data: PaymentStatusData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusData {
    pub merchant_transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Amount in paise.
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_instrument: Option<PaymentInstrument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstrument {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
}

impl PaymentInstrument {
    /// Instrument-specific reference shown on the receipt as `(label, value)`.
    ///
    /// Only UPI (UTR number) and card (card type) payments carry one.
    pub fn reference(&self) -> Option<(&'static str, String)> {
        let (label, value) = match self.kind.as_str() {
            "UPI" => ("UTR Number", self.utr.as_deref()),
            "CARD" => ("Card Type", self.card_type.as_deref()),
            _ => return None,
        };
        Some((label, value.unwrap_or_default().replacen('_', " ", 1)))
    }
}
