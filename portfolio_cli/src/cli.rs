//! Command-line arguments and the submit flow behind them

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use core_lib::{
    extractors::FILE_UPLOAD_CONTROL, format_connect_data_named, format_pitch_data, AppConfig,
    Attachment, NotificationSurface, Notifier, PortfolioApi, SubmissionResult, Validatable,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "portfolio",
    version,
    about = "Submit pitch and contact forms to the portfolio backend"
)]
pub struct Cli {
    /// Overrides the configured API base URL
    #[arg(long, env = "PORTFOLIO_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Exit without waiting for the notification to be dismissed
    #[arg(long, global = true)]
    pub no_wait: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a business pitch, optionally with a proposal document
    Pitch(PitchArgs),
    /// Send a contact inquiry
    Connect(ConnectArgs),
}

#[derive(Debug, Args)]
pub struct PitchArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub sector: Option<String>,
    /// Funding ask, free-form (e.g. "$250k")
    #[arg(long)]
    pub investment: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long = "summary")]
    pub pitch_summary: Option<String>,
    /// Proposal document to attach
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConnectArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub purpose: Option<String>,
    #[arg(long)]
    pub message: Option<String>,
}

impl PitchArgs {
    /// The flags as the form's named fields.
    fn fields(&self) -> HashMap<String, String> {
        [
            ("name", &self.name),
            ("company", &self.company),
            ("sector", &self.sector),
            ("investment", &self.investment),
            ("email", &self.email),
            ("phone", &self.phone),
            ("pitchSummary", &self.pitch_summary),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key.to_string(), v)))
        .collect()
    }

    async fn file_controls(&self) -> Result<HashMap<String, Vec<Attachment>>> {
        let mut controls = HashMap::new();
        if let Some(path) = &self.file {
            let attachment = Attachment::from_path(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            controls.insert(FILE_UPLOAD_CONTROL.to_string(), vec![attachment]);
        }
        Ok(controls)
    }
}

impl ConnectArgs {
    fn fields(&self) -> HashMap<String, String> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("purpose", &self.purpose),
            ("message", &self.message),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key.to_string(), v)))
        .collect()
    }
}

/// Loads `config` (or `./config.toml`) and applies a `--base-url` override,
/// which must pass the same validation as configured values.
pub fn load_config(config: Option<&Path>, base_url: Option<String>) -> Result<AppConfig> {
    let mut config = match config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(base_url) = base_url {
        config.api.base_url = base_url;
        config.validate().context("Invalid base URL")?;
    }

    Ok(config)
}

/// Process exit status for a finished submission.
pub fn exit_status(result: &SubmissionResult) -> u8 {
    if result.is_success() {
        0
    } else {
        1
    }
}

/// Submits the form named by `command` and shows the outcome. Only local
/// problems (an unreadable attachment) are returned as errors.
pub async fn run<A, S>(
    api: &A,
    notifier: &Notifier<S>,
    command: Command,
    wait: bool,
) -> Result<SubmissionResult>
where
    A: PortfolioApi + ?Sized,
    S: NotificationSurface,
{
    let (result, success_message) = match command {
        Command::Pitch(args) => {
            let controls = args.file_controls().await?;
            let form = format_pitch_data(&args.fields(), &controls);

            let check = form.check_presence();
            if check.is_valid {
                info!(company = %form.company, "Sending pitch");
                (api.submit_pitch(form).await, "Pitch submitted successfully!")
            } else {
                warn!(errors = ?check.errors, "Pitch form is incomplete");
                (SubmissionResult::failure(check.messages().join(", ")), "")
            }
        }
        Command::Connect(args) => {
            let form = format_connect_data_named(&args.fields());

            let check = form.check_presence();
            if check.is_valid {
                info!(purpose = %form.purpose, "Sending contact inquiry");
                (api.submit_connect(&form).await, "Message sent successfully!")
            } else {
                warn!(errors = ?check.errors, "Contact form is incomplete");
                (SubmissionResult::failure(check.messages().join(", ")), "")
            }
        }
    };

    if let Some(data) = result.data() {
        println!("{}", serde_json::to_string_pretty(data)?);
    }

    let handle = notifier.show_result(&result, success_message);
    if wait {
        handle.dismissed().await;
    }

    Ok(result)
}
