//! Conversions from external infrastructure errors into domain errors.

use canto_domain::CantoError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CantoError);

impl From<InfraError> for CantoError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CantoError> for InfraError {
    fn from(value: CantoError) -> Self {
        InfraError(value)
    }
}

trait IntoCantoError {
    fn into_canto(self) -> CantoError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → CantoError */
/* -------------------------------------------------------------------------- */

impl IntoCantoError for SqlError {
    fn into_canto(self) -> CantoError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => CantoError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => CantoError::Database("database is locked".into()),
                    ErrorCode::ReadOnly => CantoError::Database("database is read-only".into()),
                    ErrorCode::CannotOpen => {
                        CantoError::Database(format!("unable to open database: {message}"))
                    }
                    _ => CantoError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => CantoError::Database("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                CantoError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                CantoError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => {
                CantoError::Database(format!("invalid database path: {}", path.to_string_lossy()))
            }
            other => CantoError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_canto())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → CantoError */
/* -------------------------------------------------------------------------- */

impl IntoCantoError for r2d2::Error {
    fn into_canto(self) -> CantoError {
        CantoError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_canto())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CantoError */
/* -------------------------------------------------------------------------- */

impl IntoCantoError for HttpError {
    fn into_canto(self) -> CantoError {
        if self.is_timeout() {
            return CantoError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CantoError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return CantoError::Config(format!("invalid HTTP request: {}", self.without_url()));
        }

        if let Some(status) = self.status() {
            return CantoError::unexpected(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
            );
        }

        // Strip the URL: token requests carry credentials in the query string.
        CantoError::Network(self.without_url().to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_canto())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
