//! Blocking client for the Yandex Practicum review API
//!
//! One `GET` per call against the fixed statuses endpoint, authenticated
//! with an `Authorization: OAuth <token>` header. No retries here; a failed
//! call surfaces as an error and the loop tries again next cycle.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::core::ports::HomeworkApi;
use crate::error::Error;

/// Endpoint serving homework review statuses
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

// Bounds a cycle when the upstream API stops answering.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the review API
#[derive(Debug)]
pub struct PracticumClient {
    token: String,
    client: Client,
}

impl PracticumClient {
    /// Build a client authenticating with `token`
    pub fn new(token: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { token, client })
    }
}

impl HomeworkApi for PracticumClient {
    fn homework_statuses(&self, from_date: u64) -> Result<Value, Error> {
        let response = self
            .client
            .get(ENDPOINT)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(|source| Error::Connection { from_date, source })?;

        if response.status() != StatusCode::OK {
            return Err(Error::Http {
                status: response.status().as_u16(),
                from_date,
            });
        }
        response
            .json::<Value>()
            .map_err(|error| Error::MalformedResponse(format!("body is not valid JSON: {error}")))
    }
}
