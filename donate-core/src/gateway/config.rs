use std::time::Duration;

/// Default deadline for calls to the payment backend.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Connection settings for a [`super::PaymentGateway`] implementation.
///
/// `base_url` is the backend root; endpoint paths are appended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Applied to every request; expiry is treated like any transport fault.
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for `path` under the backend root.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
