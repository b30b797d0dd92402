//! Environment configuration
//!
//! The bot is configured entirely through three required environment
//! variables. All of them must be present and non-empty before the loop is
//! entered; a missing one aborts startup with every absent name reported.

use std::env;

use crate::error::Error;

/// The environment variables the bot cannot run without
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Immutable credentials read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework review API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Chat the notifications are addressed to
    pub telegram_chat_id: String,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Empty-string values count as missing. Every missing variable is
    /// logged at error level and collected into the returned
    /// [`Error::ConfigMissing`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// [`Config::from_env`] passes the process environment; tests pass a
    /// map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let [practicum_token, telegram_token, telegram_chat_id] =
            REQUIRED_VARS.map(|name| match lookup(name) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    log::error!("required environment variable {name} is not set");
                    missing.push(name.to_string());
                    String::new()
                },
            });

        if missing.is_empty() {
            Ok(Self {
                practicum_token,
                telegram_token,
                telegram_chat_id,
            })
        } else {
            Err(Error::ConfigMissing { vars: missing })
        }
    }
}
