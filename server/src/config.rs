//! Configuration management for the server.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Number of items generated at startup
    pub item_count: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let item_count = match lookup("ITEM_COUNT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidItemCount)?,
            None => itemdeck_engine::DEFAULT_ITEM_COUNT,
        };

        Ok(Self {
            host,
            port,
            item_count,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid ITEM_COUNT value")]
    InvalidItemCount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.item_count, 1_000_000);
    }

    #[test]
    fn overrides() {
        let config = load(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("ITEM_COUNT", "500")]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.item_count, 500);
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(load(&[("PORT", "http")]), Err(ConfigError::InvalidPort)));
        assert!(matches!(load(&[("PORT", "70000")]), Err(ConfigError::InvalidPort)));
        assert!(matches!(
            load(&[("ITEM_COUNT", "-1")]),
            Err(ConfigError::InvalidItemCount)
        ));
    }
}
