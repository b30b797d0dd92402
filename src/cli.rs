//! CLI definitions and entry point

use anyhow::Context;
use clap::Parser;

use crate::adapters::{PracticumClient, TelegramBot};
use crate::config::Config;
use crate::core::models::Session;
use crate::core::services::poller;

/// hwbot - Telegram notifier for homework review status
#[derive(Parser, Debug, Clone, Copy)]
#[command(
    name = "hwbot",
    version,
    about = "Telegram notifier for Yandex Practicum homework review status",
    long_about = "Polls the Yandex Practicum review API every ten minutes and\n\
                  announces homework status changes to a Telegram chat.\n\n\
                  Configured via PRACTICUM_TOKEN, TELEGRAM_TOKEN and\n\
                  TELEGRAM_CHAT_ID (a .env file is honored)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run a single poll cycle and exit (deployment smoke test)
    #[arg(long)]
    pub once: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let api = PracticumClient::new(config.practicum_token).context("building review API client")?;
    let bot = TelegramBot::new(&config.telegram_token, config.telegram_chat_id)
        .context("building Telegram client")?;

    let mut session = Session::new();
    log::info!(
        "polling every {}s (chat notifications enabled)",
        poller::POLL_INTERVAL.as_secs()
    );
    poller::run(&api, &bot, &mut session, poller::POLL_INTERVAL, cli.once);
    Ok(())
}
