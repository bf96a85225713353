use tracing::info;

/// Hands the donor over to the payment gateway.
///
/// Once called, the donation form is finished; the gateway owns the rest
/// of the payment.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Prints the gateway URL for the donor to open.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &str) {
        info!(%url, "redirecting to payment gateway");
        println!("\nContinue to the payment gateway to complete your donation:\n  {url}\n");
    }
}
