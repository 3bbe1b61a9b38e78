use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::Parser;

use rs_mail_board::config::{self, DEFAULT_TIMEOUT_SECS};
use rs_mail_board::terminal::run_tui;
use rs_mail_board::webhook::client::WebhookClient;

#[derive(Parser)]
#[command(name = "rs_mail_board")]
#[command(about = "Unread email dashboard backed by a workflow webhook", long_about = None)]
struct Cli {
    /// Override the webhook base URL from the config file
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = config::load_config().map_err(|e| anyhow!("Configuration error: {e}"))?;
    let base_url = cli.base_url.unwrap_or(cfg.base_url);
    let timeout = Duration::from_secs(cfg.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    let webhook = WebhookClient::new(base_url, timeout)?;
    run_tui(&webhook).map_err(|e| anyhow!("{e}"))
}
