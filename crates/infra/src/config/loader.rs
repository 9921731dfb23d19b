//! Configuration loader
//!
//! Loads [`CantoConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CANTO_API_URL`, `CANTO_APP_ID`, `CANTO_APP_SECRET`, `CANTO_OAUTH_URL`,
//!   `CANTO_OAUTH_TOKEN_URL`: required
//! - `CANTO_FILTER_SCHEMES`: scheme filter for listings (default `image`)
//! - `CANTO_HTTP_TIMEOUT_SECS`: transport timeout (default 30)
//! - `CANTO_STATE_SECRET`: OAuth state secret (default: the app secret)
//! - `CANTO_DB_PATH`: SQLite database path (default `canto.db`)
//!
//! ## File Locations
//! The loader looks for `canto.{toml,json}` then `config.{toml,json}` in the
//! current directory, then the same names in the parent directory.

use std::path::{Path, PathBuf};

use canto_domain::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_FILTER_SCHEMES, DEFAULT_HTTP_TIMEOUT_SECS,
};
use canto_domain::{CantoConfig, CantoError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["canto.toml", "canto.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `CantoError::Config` if neither source yields a valid config.
pub fn load() -> Result<CantoConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `CantoError::Config` if a required variable is missing or a value
/// is invalid.
pub fn load_from_env() -> Result<CantoConfig> {
    let mut config = CantoConfig::new(
        env_var("CANTO_API_URL")?,
        env_var("CANTO_APP_ID")?,
        env_var("CANTO_APP_SECRET")?,
        env_var("CANTO_OAUTH_URL")?,
        env_var("CANTO_OAUTH_TOKEN_URL")?,
    );

    config.filter_schemes =
        env_optional("CANTO_FILTER_SCHEMES").unwrap_or_else(|| DEFAULT_FILTER_SCHEMES.to_string());
    config.http_timeout_secs = match env_optional("CANTO_HTTP_TIMEOUT_SECS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| CantoError::Config(format!("Invalid HTTP timeout: {e}")))?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };
    config.state_secret = env_optional("CANTO_STATE_SECRET");
    config.database_path =
        env_optional("CANTO_DB_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

    config.validate()
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations (see
/// [`find_config_path`]).
///
/// # Errors
/// Returns `CantoError::Config` if the file is missing, malformed, or fails
/// validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<CantoConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CantoError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => find_config_path().ok_or_else(|| {
            CantoError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CantoError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)?.validate()
}

/// Parse configuration; format is chosen by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<CantoConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CantoError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CantoError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CantoError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the current or parent directory.
pub fn find_config_path() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_in(&cwd)
}

fn find_in(dir: &Path) -> Option<PathBuf> {
    let parent = dir.parent();
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .chain(parent.into_iter().flat_map(|p| CONFIG_FILE_NAMES.iter().map(move |n| p.join(n))))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    env_optional(key)
        .ok_or_else(|| CantoError::Config(format!("Missing required environment variable: {key}")))
}

/// Value of `key`, treating an empty string as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 9] = [
        "CANTO_API_URL",
        "CANTO_APP_ID",
        "CANTO_APP_SECRET",
        "CANTO_OAUTH_URL",
        "CANTO_OAUTH_TOKEN_URL",
        "CANTO_FILTER_SCHEMES",
        "CANTO_HTTP_TIMEOUT_SECS",
        "CANTO_STATE_SECRET",
        "CANTO_DB_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn set_required_env() {
        std::env::set_var("CANTO_API_URL", "https://tenant.canto.com/");
        std::env::set_var("CANTO_APP_ID", "app");
        std::env::set_var("CANTO_APP_SECRET", "secret");
        std::env::set_var("CANTO_OAUTH_URL", "https://oauth.canto.com/authorize");
        std::env::set_var("CANTO_OAUTH_TOKEN_URL", "https://oauth.canto.com/token");
    }

    #[test]
    fn load_from_env_applies_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        set_required_env();

        let config = load_from_env().expect("config from env");

        assert_eq!(config.api_url, "https://tenant.canto.com");
        assert_eq!(config.filter_schemes, "image");
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.state_secret(), "secret");
        assert_eq!(config.database_path, "canto.db");
        clear_env();
    }

    #[test]
    fn load_from_env_reads_optional_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        set_required_env();
        std::env::set_var("CANTO_FILTER_SCHEMES", "image|video");
        std::env::set_var("CANTO_HTTP_TIMEOUT_SECS", "5");
        std::env::set_var("CANTO_STATE_SECRET", "state");
        std::env::set_var("CANTO_DB_PATH", "/tmp/canto-test.db");

        let config = load_from_env().expect("config from env");

        assert_eq!(config.filter_schemes, "image|video");
        assert_eq!(config.http_timeout_secs, 5);
        assert_eq!(config.state_secret(), "state");
        assert_eq!(config.database_path, "/tmp/canto-test.db");
        clear_env();
    }

    #[test]
    fn load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let err = load_from_env().unwrap_err();

        assert!(matches!(err, CantoError::Config(msg) if msg.contains("CANTO_API_URL")));
    }

    #[test]
    fn load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        set_required_env();
        std::env::set_var("CANTO_HTTP_TIMEOUT_SECS", "soon");

        assert!(matches!(load_from_env(), Err(CantoError::Config(_))));
        clear_env();
    }

    #[test]
    fn load_from_file_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("canto.toml");
        std::fs::write(
            &path,
            r#"
api_url = "https://tenant.canto.com"
app_id = "app"
app_secret = "secret"
oauth_url = "https://oauth.canto.com/authorize"
oauth_token_url = "https://oauth.canto.com/token"
filter_schemes = "document"
"#,
        )
        .unwrap();

        let config = load_from_file(Some(path)).expect("toml config");

        assert_eq!(config.filter_schemes, "document");
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn load_from_file_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "api_url": "https://tenant.canto.com/",
                "app_id": "app",
                "app_secret": "secret",
                "oauth_url": "https://oauth.canto.com/authorize",
                "oauth_token_url": "https://oauth.canto.com/token",
                "database_path": "data/canto.db"
            }"#,
        )
        .unwrap();

        let config = load_from_file(Some(path)).expect("json config");

        assert_eq!(config.api_url, "https://tenant.canto.com");
        assert_eq!(config.database_path, "data/canto.db");
    }

    #[test]
    fn load_from_file_rejects_invalid_content() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("canto.json");
        std::fs::write(&broken, r#"{ "api_url": "#).unwrap();
        let unsupported = dir.path().join("canto.yaml");
        std::fs::write(&unsupported, "api_url: x").unwrap();

        assert!(matches!(load_from_file(Some(broken)), Err(CantoError::Config(_))));
        assert!(matches!(load_from_file(Some(unsupported)), Err(CantoError::Config(_))));
        assert!(matches!(
            load_from_file(Some(dir.path().join("missing.toml"))),
            Err(CantoError::Config(_))
        ));
    }

    #[test]
    fn lookup_prefers_canto_file_then_parent_directory() {
        let root = TempDir::new().unwrap();
        let child = root.path().join("app");
        std::fs::create_dir(&child).unwrap();

        assert_eq!(find_in(&child), None);

        std::fs::write(root.path().join("config.json"), "{}").unwrap();
        assert_eq!(find_in(&child), Some(root.path().join("config.json")));

        std::fs::write(child.join("config.toml"), "").unwrap();
        std::fs::write(child.join("canto.json"), "{}").unwrap();
        assert_eq!(find_in(&child), Some(child.join("canto.json")));
    }
}
