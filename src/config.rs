//! Storefront configuration parsed from environment variables.

use std::path::PathBuf;

use reqwest::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL-valued variable could not be parsed.
    #[error("invalid URL in {var}: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    /// A numeric variable was present but unusable.
    #[error("invalid value for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub port: u16,
    /// Backend API root, without trailing slash.
    pub backend_url: String,
    /// Base URL product image filenames are appended to, without trailing slash.
    pub image_base_url: String,
    /// Products per home page.
    pub page_size: u32,
    pub timeouts: BackendTimeouts,
    pub static_dir: PathBuf,
}

impl StorefrontConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8000`
    /// - `IMAGE_BASE_URL`: default `{BACKEND_URL}/images`
    /// - `PAGE_SIZE`: default 20, must be positive
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `STATIC_DIR`: default `static/` under the crate root
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a URL is malformed or a number is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_number("PORT", DEFAULT_PORT)?;

        let backend_url = normalize_url(
            "BACKEND_URL",
            &std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
        )?;
        let image_base_url = match std::env::var("IMAGE_BASE_URL") {
            Ok(raw) => normalize_url("IMAGE_BASE_URL", &raw)?,
            Err(_) => format!("{backend_url}/images"),
        };

        let page_size = env_number("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidNumber { var: "PAGE_SIZE", value: "0".into() });
        }

        let timeouts = BackendTimeouts {
            request_secs: env_number("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_number("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS)?,
        };

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));

        Ok(Self { port, backend_url, image_base_url, page_size, timeouts, static_dir })
    }
}

fn env_number<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn normalize_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl { var, reason: e.to_string() })?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
