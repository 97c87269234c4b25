//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default HTTP timeout when `BONDIFY_HTTP_TIMEOUT_SECS` is not set.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Bondify API (no trailing slash)
    pub base_url: String,
    /// Where the access/refresh token pair is persisted
    pub token_path: PathBuf,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            token_path: env::temp_dir().join("bondify-test-session.json"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// `BONDIFY_BASE_URL` is required; `BONDIFY_TOKEN_PATH` defaults to a
    /// fixed file under the platform data directory, and
    /// `BONDIFY_HTTP_TIMEOUT_SECS` defaults to 30.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = env::var("BONDIFY_BASE_URL")
            .map_err(|_| ConfigError::Missing("BONDIFY_BASE_URL"))?
            .trim_end_matches('/')
            .to_string();

        let token_path = match env::var("BONDIFY_TOKEN_PATH") {
            Ok(p) => PathBuf::from(p),
            Err(_) => default_token_path(),
        };

        let timeout_secs = env::var("BONDIFY_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            token_path,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Default location for the persisted session: the platform data dir,
/// falling back to the temp dir when none is defined.
fn default_token_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("bondify")
        .join("session.json")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
