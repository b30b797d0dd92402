//! Homework review statuses and notification text
//!
//! A homework record arrives as a JSON object with a `homework_name` and a
//! `status` field. The three recognized statuses each map to a fixed
//! Russian verdict line that is sent to the chat.
//!
//! # Examples
//!
//! ```
//! use hwbot::core::models::Status;
//!
//! let status: Status = "approved".parse().unwrap();
//! assert_eq!(status, Status::Approved);
//! assert!(status.verdict().contains("Ура"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The reviewer accepted the submission
    Approved,
    /// A reviewer picked the submission up
    Reviewing,
    /// The reviewer sent the submission back with remarks
    Rejected,
}

impl Status {
    /// The Russian verdict line announced for this status
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Reviewing => write!(f, "reviewing"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// Extract the raw wire status of a homework record
///
/// The status is read before it is parsed, so the poller can compare it
/// against the previously seen value even when it is not a recognized one.
pub fn raw_status(record: &Value) -> Result<&str, Error> {
    record
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MalformedResponse("homework record has no status".to_string()))
}

/// Build the notification line for a homework record
///
/// Fails with [`Error::MissingName`] when `homework_name` is absent or null
/// and with [`Error::UnknownStatus`] when the status is outside the known
/// set. Nothing is sent for a record this function rejects.
pub fn notification(record: &Value) -> Result<String, Error> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(Error::MissingName)?;
    let status: Status = raw_status(record)?.parse()?;
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}",
        verdict = status.verdict()
    ))
}
