//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_MAX_SNIPPET_SIZE, DEFAULT_PORT, DEFAULT_STORE_TIMEOUT_MS};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for SnipShare.
///
/// Loaded once at startup and handed to the database, service, and server
/// constructors. Nothing else in the workspace reads the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_path: String,
    pub port: u16,
    pub max_snippet_size: usize,
    pub store_timeout_ms: u64,
    /// Listener address override (`BIND`), validated by the server.
    pub bind: Option<String>,
    /// Accept cross-origin requests and non-loopback binds.
    pub allow_public_access: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            port: DEFAULT_PORT,
            max_snippet_size: DEFAULT_MAX_SNIPPET_SIZE,
            store_timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
            bind: None,
            allow_public_access: false,
        }
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    std::env::current_dir().ok()
}

fn default_db_path() -> String {
    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".cache")
        .join("snipshare")
        .join("db")
        .to_string_lossy()
        .to_string()
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse().ok())
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            db_path: env::var("DB_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(expand_tilde)
                .unwrap_or(defaults.db_path),
            port: parse_env("PORT").unwrap_or(defaults.port),
            max_snippet_size: parse_env("MAX_SNIPPET_SIZE").unwrap_or(defaults.max_snippet_size),
            store_timeout_ms: parse_env("STORE_TIMEOUT_MS")
                .filter(|ms: &u64| *ms > 0)
                .unwrap_or(defaults.store_timeout_ms),
            bind: env::var("BIND").ok().filter(|bind| !bind.trim().is_empty()),
            allow_public_access: env_flag_enabled("ALLOW_PUBLIC_ACCESS"),
        }
    }

    /// Upper bound applied to each store call made on behalf of a request.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
