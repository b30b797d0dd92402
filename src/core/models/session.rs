//! Mutable polling state
//!
//! The original script kept these values in loop-local variables; here they
//! are an explicit struct threaded through each cycle. The state is
//! in-memory only and resets on restart.

/// State carried from one poll cycle to the next
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// `from_date` cursor for the next request, in unix seconds.
    ///
    /// Starts at 0 (full history) and advances to the server's
    /// `current_date` after every successful fetch.
    pub cursor: u64,
    /// Raw wire status of the most recent homework, as last announced.
    ///
    /// Updated only after the notification was delivered, so a failed send
    /// is retried on the next cycle.
    pub last_status: Option<String>,
    /// Text of the last failure report delivered to the chat.
    ///
    /// Consecutive identical failure reports are suppressed against this.
    pub last_error: Option<String>,
}

impl Session {
    /// Fresh state: full-history cursor, nothing announced yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
