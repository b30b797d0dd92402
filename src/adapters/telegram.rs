//! Telegram Bot API client
//!
//! Delivers notification text to one fixed chat via the `sendMessage`
//! method. The bot API wraps every answer in `{"ok": bool, ...}`; an
//! `ok: false` answer is a delivery failure even on HTTP 200.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::core::ports::Messenger;
use crate::error::Error;

const API_BASE: &str = "https://api.telegram.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for one bot talking to one chat
#[derive(Debug)]
pub struct TelegramBot {
    chat_id: String,
    url: String,
    client: Client,
}

/// Envelope of a `sendMessage` answer
#[derive(Debug, Deserialize)]
struct SendMessageAnswer {
    ok: bool,
    description: Option<String>,
}

impl TelegramBot {
    /// Build a client for `token`, addressing `chat_id`
    pub fn new(token: &str, chat_id: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            url: format!("{API_BASE}/bot{token}/sendMessage"),
            chat_id,
            client,
        })
    }

    fn delivery_error(&self, reason: impl Into<String>) -> Error {
        Error::SendMessage {
            chat_id: self.chat_id.clone(),
            reason: reason.into(),
        }
    }
}

impl Messenger for TelegramBot {
    fn send(&self, text: &str) -> Result<(), Error> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({"chat_id": self.chat_id, "text": text}))
            .send()
            .map_err(|error| self.delivery_error(error.to_string()))?;

        let status = response.status();
        let answer: SendMessageAnswer = response
            .json()
            .map_err(|error| self.delivery_error(format!("unreadable bot API answer: {error}")))?;
        if !answer.ok {
            let reason = answer
                .description
                .unwrap_or_else(|| format!("bot API answered HTTP {status}"));
            return Err(self.delivery_error(reason));
        }
        log::info!("message delivered to chat {}", self.chat_id);
        Ok(())
    }
}
