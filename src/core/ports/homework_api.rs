//! Review API port
//!
//! Defines the interface for fetching homework review statuses.

use serde_json::Value;

use crate::error::Error;

/// Upstream review API abstraction
///
/// The real implementation performs one blocking HTTP GET per call; tests
/// substitute scripted responses.
pub trait HomeworkApi {
    /// Fetch homework statuses updated since `from_date` (unix seconds).
    ///
    /// `from_date = 0` requests the full history. Returns the raw JSON
    /// body; shape validation is the caller's job.
    fn homework_statuses(&self, from_date: u64) -> Result<Value, Error>;
}
