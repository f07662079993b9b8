//! Site configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` through `dotenvy`, then builds one [`SiteConfig`]
//! before any service is constructed. Parse helpers are pure so they can be
//! tested without touching the process environment.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Which collection store backs the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Hosted auth service endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub backend: StoreBackend,
    /// Required when `backend` is `Postgres`.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// `None` only with the memory backend, which then uses the static
    /// local-preview provider.
    pub auth: Option<AuthConfig>,
    /// Lowercased admin allowlist. Empty admits every signed-in user.
    pub admin_emails: Vec<String>,
    pub cookie_secure: bool,
}

impl SiteConfig {
    /// Build typed config from the process environment.
    ///
    /// - `PORT`: default 3000
    /// - `STORE_BACKEND`: `postgres` (default) or `memory`
    /// - `DATABASE_URL`: required for `postgres`
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `AUTH_URL` + `AUTH_ANON_KEY`: hosted auth service; required for
    ///   `postgres`, both or neither for `memory`
    /// - `ADMIN_EMAILS`: comma-separated allowlist
    /// - `COOKIE_SECURE`: boolean, default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is absent or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let port = parse_or("PORT", var("PORT").as_deref(), DEFAULT_PORT)?;
        let backend = parse_backend(var("STORE_BACKEND").as_deref())?;
        let database_url = var("DATABASE_URL");
        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS").as_deref(), DEFAULT_DB_MAX_CONNECTIONS)?;

        let auth = match (var("AUTH_URL"), var("AUTH_ANON_KEY")) {
            (Some(url), Some(anon_key)) => {
                Some(AuthConfig { url: url.trim_end_matches('/').to_owned(), anon_key })
            }
            (None, None) if backend == StoreBackend::Memory => None,
            (None, None) => return Err(ConfigError::Missing("AUTH_URL")),
            (Some(_), None) => return Err(ConfigError::Missing("AUTH_ANON_KEY")),
            (None, Some(_)) => return Err(ConfigError::Missing("AUTH_URL")),
        };

        let admin_emails = parse_email_list(var("ADMIN_EMAILS").as_deref());
        let cookie_secure = match var("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw)
                .ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => false,
        };

        Ok(Self { port, backend, database_url, db_max_connections, auth, admin_emails, cookie_secure })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_backend(raw: Option<&str>) -> Result<StoreBackend, ConfigError> {
    match raw.map(str::trim).unwrap_or("postgres") {
        "postgres" => Ok(StoreBackend::Postgres),
        "memory" => Ok(StoreBackend::Memory),
        other => Err(ConfigError::Invalid { var: "STORE_BACKEND", value: other.to_owned() }),
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
        None => Ok(default),
    }
}

fn parse_email_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|email| email.trim().to_ascii_lowercase())
        .filter(|email| !email.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
