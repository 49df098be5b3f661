use std::time::Duration;

use anyhow::{Context, Result};

use crate::render::{RenderOptions, DEFAULT_SKILLS_FALLBACK_COUNT};

const DEFAULT_ROUTER_URL: &str = "https://router.swarmandbee.com";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub router_url: String,
    pub router_timeout: Duration,
    pub router_max_attempts: u32,
    pub skills_fallback_count: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process env in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            router_url: lookup("ROUTER_URL").unwrap_or_else(|| DEFAULT_ROUTER_URL.to_string()),
            router_timeout: Duration::from_secs(parse_or(&lookup, "ROUTER_TIMEOUT_SECS", 30)?),
            router_max_attempts: parse_or(&lookup, "ROUTER_MAX_ATTEMPTS", 1)?,
            skills_fallback_count: parse_or(
                &lookup,
                "SKILLS_FALLBACK_COUNT",
                DEFAULT_SKILLS_FALLBACK_COUNT,
            )?,
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            skills_fallback_count: self.skills_fallback_count,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
