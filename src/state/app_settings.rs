use anyhow::Context;
use nba_api::Endpoints;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub port: u16,
    /// Error-tracking DSN; faults are only logged locally when unset.
    pub sentry_dsn: Option<String>,
    /// Upper bound on each outbound page fetch.
    pub timeout: Duration,
    pub endpoints: Endpoints,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            sentry_dsn: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            endpoints: Endpoints::default(),
        }
    }
}

impl AppSettings {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| var(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(port) => port.parse().with_context(|| format!("PORT={port} is not a port number"))?,
            None => defaults.port,
        };

        let timeout = match var("GAMETHREAD_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .with_context(|| format!("GAMETHREAD_TIMEOUT_SECS={secs} is not a whole number"))?;
                anyhow::ensure!(secs > 0, "GAMETHREAD_TIMEOUT_SECS must be at least 1");
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let endpoints = Endpoints {
            nba: var("GAMETHREAD_NBA_URL").unwrap_or(defaults.endpoints.nba),
            espn: var("GAMETHREAD_ESPN_URL").unwrap_or(defaults.endpoints.espn),
            preview: var("GAMETHREAD_PREVIEW_URL").unwrap_or(defaults.endpoints.preview),
        };

        Ok(Self {
            port,
            sentry_dsn: var("SENTRY_DSN"),
            timeout,
            endpoints,
        })
    }
}
