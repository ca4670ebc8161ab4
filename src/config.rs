use anyhow::{Context, Result};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Where the hosted collection lives and how to reach it
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` runs against an in-process collection
    pub remote: Option<RemoteConfig>,
    pub storage_path: PathBuf,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: None,
            storage_path: PathBuf::from("property_hunter.json"),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source, so tests don't touch the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let remote = match lookup("HUNTER_REMOTE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let api_key = lookup("HUNTER_REMOTE_KEY")
                    .context("HUNTER_REMOTE_KEY must be set when HUNTER_REMOTE_URL is")?;
                Some(RemoteConfig { url, api_key })
            }
            None => {
                info!("HUNTER_REMOTE_URL not set, using in-memory collection");
                None
            }
        };

        let storage_path = lookup("HUNTER_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_path);

        let timeout_secs: u64 = try_load(&lookup, "HUNTER_REQUEST_TIMEOUT_SECS", "30")?;
        if timeout_secs == 0 {
            anyhow::bail!("Invalid HUNTER_REQUEST_TIMEOUT_SECS value '0': must be at least 1");
        }

        Ok(Self {
            remote,
            storage_path,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        debug!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid {key} value '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_run_offline() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn remote_needs_a_key() {
        let missing = Config::from_lookup(lookup(&[("HUNTER_REMOTE_URL", "https://x.example")]));
        assert!(missing.is_err());

        let config = Config::from_lookup(lookup(&[
            ("HUNTER_REMOTE_URL", "https://x.example"),
            ("HUNTER_REMOTE_KEY", "anon"),
            ("HUNTER_REQUEST_TIMEOUT_SECS", "5"),
            ("HUNTER_STORAGE_PATH", "/tmp/hunter.json"),
        ]))
        .unwrap();
        assert_eq!(config.remote.unwrap().api_key, "anon");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.storage_path, PathBuf::from("/tmp/hunter.json"));
    }

    #[test]
    fn bad_timeout_is_an_error() {
        let result = Config::from_lookup(lookup(&[("HUNTER_REQUEST_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_is_an_error() {
        let result = Config::from_lookup(lookup(&[("HUNTER_REQUEST_TIMEOUT_SECS", "0")]));
        assert!(result.unwrap_err().to_string().starts_with("Invalid"));
    }
}
