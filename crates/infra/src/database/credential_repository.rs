//! SQLite-backed credential repository.
//!
//! Stores the deployment's credential in the singleton row `id = 1` of
//! `canto_settings`. Timestamps are unix seconds.

use std::sync::Arc;

use canto_core::CredentialRepository;
use canto_domain::{CantoError, Result, StoredCredential, TokenGrant};
use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::manager::{map_sql_error, DbManager};

const CREDENTIAL_ROW_ID: i64 = 1;

pub struct SqliteCredentialRepository {
    db: Arc<DbManager>,
}

impl SqliteCredentialRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

impl CredentialRepository for SqliteCredentialRepository {
    fn load(&self) -> Result<Option<StoredCredential>> {
        let conn = self.db.get_connection()?;
        query_credential(&conn)
    }

    fn save(&self, grant: &TokenGrant, now: DateTime<Utc>) -> Result<StoredCredential> {
        // Rows hold whole seconds; return what a later load will see.
        let grant = TokenGrant { valid_until: grant.valid_until.trunc_subsecs(0), ..grant.clone() };
        let credential = StoredCredential::from_grant(&grant, now.trunc_subsecs(0));
        let conn = self.db.get_connection()?;
        upsert_credential(&conn, &credential)?;
        debug!("Stored Canto credential");
        Ok(credential)
    }

    fn clear(&self, now: DateTime<Utc>) -> Result<()> {
        let conn = self.db.get_connection()?;
        upsert_credential(&conn, &StoredCredential::cleared(now))?;
        debug!("Cleared Canto credential");
        Ok(())
    }
}

// ============================================================================
// Synchronous SQL Operations
// ============================================================================

fn query_credential(conn: &Connection) -> Result<Option<StoredCredential>> {
    let row = conn
        .query_row(
            "SELECT access_token, refresh_token, token_valid_until, last_modified_at
             FROM canto_settings WHERE id = ?1",
            params![CREDENTIAL_ROW_ID],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<i64>>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            },
        )
        .optional()
        .map_err(map_sql_error)?;

    row.map(|(access_token, refresh_token, valid_until, modified)| -> Result<StoredCredential> {
        Ok(StoredCredential {
            access_token,
            refresh_token,
            token_valid_until: valid_until.map(from_unix).transpose()?,
            last_modified_at: from_unix(modified)?,
        })
    })
    .transpose()
}

fn upsert_credential(conn: &Connection, credential: &StoredCredential) -> Result<()> {
    conn.execute(
        "INSERT INTO canto_settings
            (id, access_token, refresh_token, token_valid_until, last_modified_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
            access_token = excluded.access_token,
            refresh_token = excluded.refresh_token,
            token_valid_until = excluded.token_valid_until,
            last_modified_at = excluded.last_modified_at",
        params![
            CREDENTIAL_ROW_ID,
            credential.access_token,
            credential.refresh_token,
            credential.token_valid_until.map(|t| t.timestamp()),
            credential.last_modified_at.timestamp(),
        ],
    )
    .map_err(map_sql_error)?;
    Ok(())
}

fn from_unix(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| CantoError::Database(format!("timestamp out of range: {secs}")))
}
