//! Process Configuration
//!
//! Settings come from environment variables, with `--bind` accepted on the command
//! line as an override. Parsing goes through a key lookup function so it can be
//! exercised without touching the real process environment.

use anyhow::{anyhow, Context, Result};
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "nocaptcha-database";
pub const DEFAULT_COLLECTION: &str = "Data";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";
pub const DEFAULT_BODY_LIMIT_KB: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!(
                "unknown store backend '{}' (expected 'mongo' or 'memory')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    /// May embed credentials; never log it.
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
    pub body_limit_kb: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr: SocketAddr = get("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .context("BIND_ADDR must be <ip>:<port>")?;
        let store: StoreBackend = get("STORE_BACKEND", "mongo").parse()?;
        let body_limit_kb = match lookup("BODY_LIMIT_KB") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("BODY_LIMIT_KB must be a number, got '{}'", raw))?,
            None => DEFAULT_BODY_LIMIT_KB,
        };

        Ok(Self {
            bind_addr,
            store,
            mongodb_uri: get("MONGODB_URI", DEFAULT_MONGODB_URI),
            database: get("MONGODB_DATABASE", DEFAULT_DATABASE),
            collection: get("MONGODB_COLLECTION", DEFAULT_COLLECTION),
            allowed_origins: parse_origins(&get("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            body_limit_kb,
        })
    }

    /// Applies command-line overrides. Unknown flags are ignored.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("--bind requires <addr:port>"))?;
                    self.bind_addr = value
                        .parse()
                        .with_context(|| format!("invalid --bind address '{}'", value))?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(())
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_kb * 1024
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            store: StoreBackend::Mongo,
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            allowed_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            body_limit_kb: DEFAULT_BODY_LIMIT_KB,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_empty() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.store, StoreBackend::Mongo);
        assert_eq!(config.database, "nocaptcha-database");
        assert_eq!(config.collection, "Data");
        assert_eq!(config.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.body_limit_bytes(), 1024 * 1024);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("STORE_BACKEND", "Memory"),
            ("MONGODB_COLLECTION", "Sessions"),
            ("CORS_ORIGINS", "https://a.example, https://b.example/ ,,"),
            ("BODY_LIMIT_KB", "64"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.collection, "Sessions");
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.body_limit_kb, 64);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("STORE_BACKEND", "redis")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("BODY_LIMIT_KB", "lots")])).is_err());
    }

    #[test]
    fn test_bind_flag_overrides_environment() {
        let mut config = Config::default();
        let args: Vec<String> = ["collector", "--verbose", "--bind", "127.0.0.1:7000"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        config.apply_args(&args).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_bind_flag_without_value_fails() {
        let mut config = Config::default();
        let args = vec!["collector".to_string(), "--bind".to_string()];

        assert!(config.apply_args(&args).is_err());
    }
}
