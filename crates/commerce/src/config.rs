//! Commerce store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GF_DATA_DIR` - Directory for file-backed state (default: `.golden-fig`)
//! - `GF_STATE_KEY` - Storage key for the state blob (default:
//!   `commerce_state`; must be non-empty, `[A-Za-z0-9_-]` only)

use std::path::PathBuf;

use thiserror::Error;

/// Default directory for file-backed state.
const DEFAULT_DATA_DIR: &str = ".golden-fig";

/// Default storage key for the serialized state blob.
const DEFAULT_STATE_KEY: &str = "commerce_state";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Commerce store configuration.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// Directory the file backend stores blobs under.
    pub data_dir: PathBuf,
    /// Key the full state blob is saved as.
    pub state_key: String,
}

impl CommerceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `GF_STATE_KEY` is set to something that
    /// cannot be used as a storage key.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("GF_DATA_DIR", DEFAULT_DATA_DIR));
        let state_key = get_env_or_default("GF_STATE_KEY", DEFAULT_STATE_KEY);
        validate_state_key(&state_key)?;

        Ok(Self {
            data_dir,
            state_key,
        })
    }
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            state_key: DEFAULT_STATE_KEY.to_owned(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// State keys become file names; enforce a safe alphabet up front so the
/// failure is a config error rather than a runtime storage error.
fn validate_state_key(key: &str) -> Result<(), ConfigError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            "GF_STATE_KEY".to_owned(),
            format!("`{key}` is not a valid storage key"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CommerceConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".golden-fig"));
        assert_eq!(config.state_key, "commerce_state");
    }

    #[test]
    fn test_validate_state_key() {
        assert!(validate_state_key("commerce_state").is_ok());
        assert!(validate_state_key("u1-cart").is_ok());
        assert!(validate_state_key("").is_err());
        assert!(validate_state_key("../escape").is_err());
        assert!(validate_state_key("has space").is_err());
    }
}
