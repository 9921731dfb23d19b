//! Application context - dependency injection container

use std::fs;
use std::path::Path;
use std::sync::Arc;

use canto_common::{OAuthStateIssuer, SharedClock, SystemClock};
use canto_core::{CantoService, CredentialRepository};
use canto_domain::{CantoConfig, CantoError, Result};
use canto_infra::{config, CantoClientFactory, DbManager, SqliteCredentialRepository};

const DATABASE_POOL_SIZE: u32 = 4;

/// Connection service wired to the HTTP client factory.
pub type CantoConnection = CantoService<CantoClientFactory>;

/// Application context - holds the configuration and the Canto service
pub struct AppContext {
    pub config: CantoConfig,
    /// `None` when the credential store is not SQLite-backed.
    pub db: Option<Arc<DbManager>>,
    pub canto: Arc<CantoConnection>,
}

impl AppContext {
    /// Create a context from `.env`, the environment and config files
    pub fn new() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
            Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
        }
        Self::new_with_config(config::load()?)
    }

    /// Create a context backed by the SQLite database at
    /// `config.database_path`
    pub fn new_with_config(config: CantoConfig) -> Result<Self> {
        let db_path = Path::new(&config.database_path);
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                CantoError::Database(format!(
                    "failed to create database directory {}: {err}",
                    parent.display()
                ))
            })?;
        }

        let db = Arc::new(DbManager::new(db_path, DATABASE_POOL_SIZE)?);
        db.run_migrations()?;

        let repository = Arc::new(SqliteCredentialRepository::new(db.clone()));
        let mut context = Self::with_repository(config, repository, Arc::new(SystemClock))?;
        context.db = Some(db);
        Ok(context)
    }

    /// Create a context over an arbitrary credential store and clock
    ///
    /// Tests use this with an in-memory repository and a mock clock.
    pub fn with_repository(
        config: CantoConfig,
        repository: Arc<dyn CredentialRepository>,
        clock: SharedClock,
    ) -> Result<Self> {
        let factory = CantoClientFactory::new(config.clone(), clock.clone())?;
        let state_issuer = OAuthStateIssuer::new(config.state_secret());
        let canto = Arc::new(CantoService::new(factory, repository, state_issuer, clock));

        tracing::info!(api_url = %config.api_url, "Canto context initialised");
        Ok(Self { config, db: None, canto })
    }

    /// Verify the credential database responds, when there is one.
    pub fn health_check(&self) -> Result<()> {
        match &self.db {
            Some(db) => db.health_check(),
            None => Ok(()),
        }
    }
}
