//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SQUIIR_API_BASE` - Backend base URL including the `/api/v1` prefix
//!   (default: `https://squiirshop-server.vercel.app/api/v1`)
//! - `SQUIIR_TOKEN_FILE` - Where the CLI persists the login token
//!   (default: `.squiir-token` in the working directory)

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL.
const DEFAULT_API_BASE: &str = "https://squiirshop-server.vercel.app/api/v1";

/// Default token file used by the file-backed credential store.
const DEFAULT_TOKEN_FILE: &str = ".squiir-token";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// SquiirShop client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, `/api/v1` prefix included.
    pub api_base: Url,
    /// Path used by the file-backed credential store.
    pub token_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQUIIR_API_BASE` is set but not a valid
    /// http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_base =
            env::var("SQUIIR_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_owned());
        let api_base = parse_api_base(&raw_base)?;

        let token_file = env::var("SQUIIR_TOKEN_FILE")
            .map_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE), PathBuf::from);

        Ok(Self {
            api_base,
            token_file,
        })
    }

    /// Build a configuration pointing at an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid http(s).
    pub fn with_base_url(base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(base)?,
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        })
    }
}

fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("SQUIIR_API_BASE".to_owned(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "SQUIIR_API_BASE".to_owned(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }

    Ok(url)
}
