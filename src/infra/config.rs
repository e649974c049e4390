//! Centralized configuration (environment variables + defaults).
//!
//! A `.env` file is honoured when the binaries call `dotenv::dotenv()`.

use anyhow::{anyhow, Context};
use std::env;
use std::str::FromStr;

/// Which dish store the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Postgres,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::Postgres => "postgres",
        }
    }
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Ok(Backend::Memory),
            "postgres" | "postgresql" | "pg" => Ok(Backend::Postgres),
            other => Err(anyhow!(
                "unknown DISH_BACKEND '{}' (expected 'memory' or 'postgres')",
                other
            )),
        }
    }
}

/// Store backend (optional, defaults to `memory`).
pub fn backend() -> anyhow::Result<Backend> {
    match env::var("DISH_BACKEND") {
        Ok(v) => v.parse(),
        Err(_) => Ok(Backend::Memory),
    }
}

/// Listen address (optional, defaults to `0.0.0.0:8000`).
pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> anyhow::Result<String> {
    env::var("DATABASE_URL").context("DATABASE_URL must be set for the postgres backend")
}
