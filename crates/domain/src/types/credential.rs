//! OAuth credential types
//!
//! A deployment holds at most one [`StoredCredential`]. An empty access token
//! means "not connected"; the row itself is kept after disconnect.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token triple returned by a successful code exchange or refresh.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub valid_until: DateTime<Utc>,
    pub refresh_token: String,
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"[REDACTED]")
            .field("valid_until", &self.valid_until)
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

/// Persisted OAuth credential for the deployment.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub access_token: String,
    pub refresh_token: String,
    pub token_valid_until: Option<DateTime<Utc>>,
    pub last_modified_at: DateTime<Utc>,
}

impl StoredCredential {
    /// Credential holding `grant`, stamped at `now`.
    pub fn from_grant(grant: &TokenGrant, now: DateTime<Utc>) -> Self {
        Self {
            access_token: grant.access_token.clone(),
            refresh_token: grant.refresh_token.clone(),
            token_valid_until: Some(grant.valid_until),
            last_modified_at: now,
        }
    }

    /// Logically cleared credential: tokens blanked, expiry removed.
    pub fn cleared(now: DateTime<Utc>) -> Self {
        Self {
            access_token: String::new(),
            refresh_token: String::new(),
            token_valid_until: None,
            last_modified_at: now,
        }
    }

    pub fn is_connected(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Access token if one is stored.
    pub fn access_token(&self) -> Option<&str> {
        self.is_connected().then_some(self.access_token.as_str())
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.is_connected() {
            ConnectionStatus::Connected {
                valid_until: self.token_valid_until,
                last_modified_at: self.last_modified_at,
            }
        } else {
            ConnectionStatus::Disconnected
        }
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("connected", &self.is_connected())
            .field("token_valid_until", &self.token_valid_until)
            .field("last_modified_at", &self.last_modified_at)
            .finish_non_exhaustive()
    }
}

/// Connection state shown on the settings view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected { valid_until: Option<DateTime<Utc>>, last_modified_at: DateTime<Utc> },
    Disconnected,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }
}
