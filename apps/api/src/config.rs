use std::num::NonZeroU64;

use anyhow::{bail, Context, Result};

/// Which `SessionStore` implementation backs the interview service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    Memory,
    Redis,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub session_backend: SessionBackend,
    /// Only read when `session_backend` is `Redis`.
    pub redis_url: Option<String>,
    pub session_ttl_secs: u64,
    /// Rejects blank roles/answers and malformed session ids when set.
    pub strict_validation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_backend = match lookup("SESSION_STORE")
            .unwrap_or_else(|| "memory".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => SessionBackend::Memory,
            "redis" => SessionBackend::Redis,
            other => bail!("SESSION_STORE must be 'memory' or 'redis', got '{other}'"),
        };

        let redis_url = lookup("REDIS_URL");
        if session_backend == SessionBackend::Redis && redis_url.is_none() {
            bail!("Required environment variable 'REDIS_URL' is not set (SESSION_STORE=redis)");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            session_backend,
            redis_url,
            session_ttl_secs: lookup("SESSION_TTL_SECS")
                .unwrap_or_else(|| "86400".to_string())
                .parse::<NonZeroU64>()
                .context("SESSION_TTL_SECS must be a positive integer")?
                .get(),
            strict_validation: parse_flag(lookup("STRICT_VALIDATION"))
                .context("STRICT_VALIDATION must be true or false")?,
        })
    }
}

fn parse_flag(value: Option<String>) -> Result<bool> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => bail!("invalid boolean '{v}'"),
    }
}
