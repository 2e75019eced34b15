// src/config.rs
use anyhow::{bail, Context, Result};
use log::warn;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
pub const DEFAULT_SYMBOL: &str = "AAPL";
pub const DEFAULT_API_KEY: &str = "demo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = [
    "https://valueglance-5rijcsfoc-athsb009s-projects.vercel.app",
    "http://localhost:3000",
];

/// Application configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub base_url: String,
    pub api_key: String,
    pub symbol: String,
    pub upstream_timeout: Duration,
    pub cors_origins: Vec<String>,
    /// Treat a numeric bound of exactly `0` as absent.
    pub legacy_zero_bounds: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            legacy_zero_bounds: false,
        }
    }
}

fn env_str(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Accept only `scheme://host[:port]`, the shape a CORS origin takes.
fn validate_origin(origin: &str) -> Result<()> {
    let Some((scheme, authority)) = origin.split_once("://") else {
        bail!("missing scheme");
    };
    if scheme.is_empty() || authority.is_empty() {
        bail!("expected scheme://host[:port]");
    }
    let url = Url::parse(origin)?;
    if url.host_str().is_none() {
        bail!("missing host");
    }
    if authority.contains(['/', '?', '#', '@']) {
        bail!("an origin carries no path, query, fragment or credentials");
    }
    Ok(())
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_str)
    }

    /// Build the config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                defaults.port
            }
        };

        let api_key = lookup("FMP_API_KEY").unwrap_or_else(|| {
            warn!("$FMP_API_KEY not set, using the rate-limited demo key");
            defaults.api_key.clone()
        });

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse::<u64>().with_context(|| {
                format!("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
            })?),
            None => defaults.upstream_timeout,
        };

        let cors_origins: Vec<String> = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };
        for origin in &cors_origins {
            validate_origin(origin)
                .with_context(|| format!("CORS_ORIGINS entry {origin:?} is not a valid origin"))?;
        }

        let legacy_zero_bounds = lookup("LEGACY_ZERO_BOUNDS")
            .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(AppConfig {
            port,
            base_url: lookup("FMP_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_key,
            symbol: lookup("FMP_SYMBOL").unwrap_or(defaults.symbol),
            upstream_timeout,
            cors_origins,
            legacy_zero_bounds,
        })
    }

    /// Endpoint for the annual income statement of the configured symbol, without the API key.
    pub fn income_statement_url(&self) -> String {
        format!("{}/income-statement/{}", self.base_url, self.symbol)
    }
}
