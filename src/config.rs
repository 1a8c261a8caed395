use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub db_max_connections: u32,

    // Rate limiting
    pub rate_per_min: u32,

    pub api_prefix: String,
    pub log_dir: String,

    /// Run the idempotent schema bootstrap before binding the server.
    pub init_schema_on_start: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            database_url: text("DATABASE_URL", "sqlite://hrms.db"),
            server_addr: text("SERVER_ADDR", "0.0.0.0:8000"),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 5)?,

            rate_per_min: parse_var(&lookup, "RATE_PER_MIN", 1000)?,

            api_prefix: text("API_PREFIX", "/api"),
            log_dir: text("LOG_DIR", "logs"),
            init_schema_on_start: parse_var(&lookup, "INIT_SCHEMA_ON_START", true)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
