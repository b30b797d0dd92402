//! Error types for the polling bot
//!
//! One tagged enum covers every failure the bot can hit, from the startup
//! configuration check to a rejected Telegram delivery. Per-cycle errors are
//! caught at the loop boundary in [`crate::core::services::poller`]; only
//! [`Error::ConfigMissing`] terminates the process.

use thiserror::Error;

/// Errors that can occur during configuration, polling, or notification
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required environment variables are unset or empty
    #[error("missing required environment variables: {}", .vars.join(", "))]
    ConfigMissing {
        /// Names of the variables that were not set
        vars: Vec<String>,
    },

    /// The review API could not be reached at the transport level
    #[error("could not reach the review API (from_date={from_date}): {source}")]
    Connection {
        /// The cursor value the failed request carried
        from_date: u64,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The review API answered with a non-200 status code
    #[error("review API returned HTTP {status} (from_date={from_date})")]
    Http {
        /// The HTTP status code of the response
        status: u16,
        /// The cursor value the request carried
        from_date: u64,
    },

    /// The response body does not have the expected shape
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    /// A homework record has no name
    #[error("homework record has an empty name")]
    MissingName,

    /// A homework record carries a status outside the known set
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// A message could not be delivered to the chat
    #[error("could not deliver message to chat {chat_id}: {reason}")]
    SendMessage {
        /// The chat the delivery was addressed to
        chat_id: String,
        /// What the transport or the bot API reported
        reason: String,
    },
}
