use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use donate_core::{Field, FormVariant};
use donate_http::HttpGateway;
use donate_ui::{
    AppConfig, DonationFormController, SubmitOutcome, TerminalNavigator, logging, prompt,
    receipt, view,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Donation front end: collects donor details, validates them and hands
/// the donor to the payment gateway.
#[derive(Debug, Parser)]
#[command(name = "donate", version, about, long_about = None)]
struct Cli {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config and DONATE_BACKEND_URL).
    #[arg(long)]
    backend_url: Option<String>,

    /// Screen variant: `standard` or `hero`.
    #[arg(long)]
    variant: Option<FormVariant>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `warn` or `donate_http=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Hide log output on stdout.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    #[command(flatten)]
    donor: DonorArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Pre-fills the form; with `--non-interactive` the form is submitted as-is.
#[derive(Debug, Args)]
struct DonorArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// 10-digit mobile number.
    #[arg(long)]
    phone: Option<String>,

    /// Donation amount in INR.
    #[arg(long, conflicts_with = "preset")]
    amount: Option<String>,

    /// One of the variant's quick-select amounts.
    #[arg(long)]
    preset: Option<u32>,

    /// Request an 80G tax-exemption certificate (requires --pan).
    #[arg(long, default_value_t = false)]
    tax_exemption: bool,

    #[arg(long)]
    pan: Option<String>,

    /// Submit without prompting.
    #[arg(long, default_value_t = false)]
    non_interactive: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the receipt for a payment-status JSON document.
    Receipt {
        /// Path to the status JSON returned after payment.
        file: PathBuf,
    },
}

impl DonorArgs {
    fn apply(
        &self,
        controller: &mut DonationFormController,
    ) -> Result<()> {
        let text_fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Phone, &self.phone),
            (Field::Amount, &self.amount),
            (Field::Pan, &self.pan),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value {
                controller.update_field(field, value.as_str());
            }
        }
        if let Some(preset) = self.preset {
            controller.select_predefined_amount(preset)?;
        }
        controller.set_tax_exemption(self.tax_exemption);
        Ok(())
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if cli.quiet {
        logging::set_stdout_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(url) = &cli.backend_url {
        config.backend_url = Some(url.clone());
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    debug!(?config, "configuration resolved");

    if let Some(Command::Receipt { file }) = &cli.command {
        let status = receipt::load_status(file)?;
        println!("{}", receipt::render(&status, &config.status_base_url));
        return Ok(());
    }

    if config.maintenance_mode {
        info!("maintenance mode is on; form disabled");
        println!("{}", view::MAINTENANCE_NOTICE);
        return Ok(());
    }

    let gateway = HttpGateway::new(config.gateway_config()?)?;
    let mut controller = DonationFormController::new(
        Arc::new(gateway),
        Box::new(TerminalNavigator),
        config.variant,
    );
    let probe = controller.spawn_liveness_probe();
    cli.donor.apply(&mut controller)?;

    let outcome = if cli.donor.non_interactive {
        controller.submit().await
    } else {
        prompt::run_interactive(&mut controller).await?
    };
    probe.abort();

    match outcome {
        SubmitOutcome::Redirected(_) | SubmitOutcome::Ignored => Ok(()),
        SubmitOutcome::Invalid(errors) => {
            println!("{}", view::FormScreen(&controller));
            bail!("donation details are invalid:\n{errors}")
        }
        SubmitOutcome::Failed(message) => bail!(message),
    }
}
