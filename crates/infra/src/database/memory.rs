//! In-process credential repository for tests and ephemeral deployments.

use canto_core::CredentialRepository;
use canto_domain::{Result, StoredCredential, TokenGrant};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    row: Mutex<Option<StoredCredential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with `credential`.
    pub fn with_credential(credential: StoredCredential) -> Self {
        Self { row: Mutex::new(Some(credential)) }
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    fn load(&self) -> Result<Option<StoredCredential>> {
        Ok(self.row.lock().clone())
    }

    fn save(&self, grant: &TokenGrant, now: DateTime<Utc>) -> Result<StoredCredential> {
        let credential = StoredCredential::from_grant(grant, now);
        *self.row.lock() = Some(credential.clone());
        Ok(credential)
    }

    fn clear(&self, now: DateTime<Utc>) -> Result<()> {
        *self.row.lock() = Some(StoredCredential::cleared(now));
        Ok(())
    }
}
