//! Wire schemas for Canto responses
//!
//! Bodies are decoded explicitly so that a missing required field surfaces as
//! `CantoError::UnexpectedResponse` instead of a panic or a silent default.

use canto_domain::{CantoError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful body of the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: ExpiresIn,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `expiresIn` arrives either as a number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpiresIn {
    Seconds(i64),
    Text(String),
}

impl ExpiresIn {
    pub fn seconds(&self) -> Result<i64> {
        match self {
            Self::Seconds(secs) => Ok(*secs),
            Self::Text(text) => text.trim().parse().map_err(|_| {
                CantoError::unexpected(200, format!("expiresIn is not an integer: {text}"))
            }),
        }
    }
}

/// Error body of the OAuth token endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}

impl OAuthErrorBody {
    /// Parse a failure body, falling back to the raw text as the description.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<OAuthErrorBody>(body) {
            Ok(parsed) if !parsed.error.is_empty() => parsed,
            _ => Self { error: String::new(), error_description: body.to_string() },
        }
    }
}

/// Detail record of `/api/v1/image/{id}`.
///
/// Only `id` is required; every other field is kept as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetail {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ImageDetail {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }
}

/// Raw listing body shared by tree, album and search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawList {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
    #[serde(default)]
    pub found: Option<u64>,
}

/// Raw paginated body of album and search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub start: Option<u64>,
}

/// Decode `body` or fail with `UnexpectedResponse` carrying `status`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| {
        CantoError::unexpected(status, format!("invalid response body ({err}): {body}"))
    })
}
