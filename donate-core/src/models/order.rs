use serde::{Deserialize, Serialize};

use super::form_state::FormState;

/// Body sent to `POST {backend}/order`.
///
/// `pan` is only present when the donor asked for a tax-exemption
/// certificate; a PAN typed earlier and then hidden is not transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
}

impl OrderRequest {
    pub fn from_form(
        form: &FormState,
        tax_exemption: bool,
    ) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            amount: form.amount.clone(),
            pan: tax_exemption.then(|| form.pan.clone()),
        }
    }
}

/// Body returned by the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<OrderData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_response: Option<InstrumentResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_info: Option<RedirectInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectInfo {
    pub url: String,
}

impl OrderResponse {
    /// Gateway URL the donor must be sent to, if the payload carries one.
    pub fn redirect_url(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .instrument_response
            .as_ref()?
            .redirect_info
            .as_ref()
            .map(|info| info.url.as_str())
            .filter(|url| !url.is_empty())
    }
}
