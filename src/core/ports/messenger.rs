//! Outbound messaging port
//!
//! Defines the interface for delivering notification text to the chat.

use crate::error::Error;

/// One-way message delivery to a fixed chat
pub trait Messenger {
    /// Deliver `text` to the configured chat.
    ///
    /// Sends exactly one message per call. Whether a failure is fatal is
    /// the caller's decision.
    fn send(&self, text: &str) -> Result<(), Error>;
}
