use std::{collections::BTreeMap, time::Duration};

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tokio::time::sleep;

use crate::utils;

pub const API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Error code the API reports while the service is temporarily unavailable.
pub const TRANSIENT_ERROR_CODE: u64 = 16;

const MAX_ATTEMPTS: u32 = 5;
const RETRY_BASE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    /// The body did not decode as JSON; carries the raw body and status.
    Status { status: StatusCode, body: String },
    /// A decoded error payload with a non-retryable (or retry-exhausted) code.
    Api { code: u64, message: String },
    Decode(serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "request failed: {}", e),
            ApiError::Status { status, body } => {
                write!(f, "unexpected response (HTTP {}): {}", status, body)
            }
            ApiError::Api { code, message } => write!(f, "API error {}: {}", code, message),
            ApiError::Decode(e) => write!(f, "cannot decode response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

/// Signed HTTP client for the Last.fm web API.
///
/// Owns the connection pool and the API key/secret pair. Every call is
/// signed with [`utils::api_sig`] before it leaves the process.
pub struct LastfmClient {
    http: Client,
    api_url: String,
    api_key: String,
    api_secret: String,
}

impl LastfmClient {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::with_api_url(API_URL.to_string(), api_key, api_secret)
    }

    /// Creates a client against a different API root. Tests point this at a
    /// local stub server.
    pub fn with_api_url(api_url: String, api_key: String, api_secret: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
            api_key,
            api_secret,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Issues a signed GET call; parameters travel as the query string.
    pub async fn get(&self, params: BTreeMap<&str, String>) -> Result<Value, ApiError> {
        self.request(Method::GET, params).await
    }

    /// Issues a signed POST call; parameters travel as a form body.
    pub async fn post(&self, params: BTreeMap<&str, String>) -> Result<Value, ApiError> {
        self.request(Method::POST, params).await
    }

    async fn request(
        &self,
        method: Method,
        mut params: BTreeMap<&str, String>,
    ) -> Result<Value, ApiError> {
        params.insert("api_key", self.api_key.clone());
        let sig = utils::api_sig(&params, &self.api_secret);
        params.insert("api_sig", sig);
        // format is requested but never signed
        params.insert("format", "json".to_string());

        let mut attempt = 1;
        let mut delay = RETRY_BASE_DELAY;

        loop {
            let request = if method == Method::GET {
                self.http.get(&self.api_url).query(&params)
            } else {
                self.http.post(&self.api_url).form(&params)
            };

            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;

            let json: Value = match serde_json::from_str(&body) {
                Ok(json) => json,
                Err(_) => return Err(ApiError::Status { status, body }),
            };

            if let Some(code) = json.get("error").and_then(Value::as_u64) {
                let message = json
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string();

                if code == TRANSIENT_ERROR_CODE && attempt < MAX_ATTEMPTS {
                    sleep(delay).await;
                    attempt += 1;
                    delay *= 2;
                    continue; // retry
                }

                return Err(ApiError::Api { code, message });
            }

            return Ok(json);
        }
    }
}
