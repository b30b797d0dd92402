//! Shape validation for review API responses
//!
//! The API answers with `{"homeworks": [...], "current_date": <unix secs>}`.
//! Validation is done on the raw JSON value so a shape mismatch is reported
//! as [`Error::MalformedResponse`] instead of a bare deserialization error.

use serde_json::Value;

use crate::error::Error;

/// One validated page of the review API
#[derive(Debug, Clone)]
pub struct ApiPage {
    /// Homework records, most recent first (possibly empty)
    pub homeworks: Vec<Value>,
    /// Server time of the response, used to advance the poll cursor
    pub current_date: Option<u64>,
}

impl ApiPage {
    /// The most recent homework record, if any
    #[must_use]
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// Validate the shape of a raw API response
///
/// The top-level value must be an object carrying a list-typed `homeworks`
/// key. An empty list is valid. `current_date` is taken along when it is
/// present and integral, and ignored otherwise.
pub fn check_response(response: &Value) -> Result<ApiPage, Error> {
    let object = response
        .as_object()
        .ok_or_else(|| Error::MalformedResponse("response is not an object".to_string()))?;
    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| Error::MalformedResponse("homeworks key is absent".to_string()))?;
    let homeworks = homeworks.as_array().ok_or_else(|| {
        Error::MalformedResponse(format!(
            "homeworks is not a list (got {})",
            json_type_name(homeworks)
        ))
    })?;
    Ok(ApiPage {
        homeworks: homeworks.clone(),
        current_date: object.get("current_date").and_then(Value::as_u64),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
