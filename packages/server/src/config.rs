use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::server::graphql::DepthLimit;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Deepest GraphQL selection accepted; root fields are depth 0.
    pub graphql_max_depth: usize,
    /// CORS origins. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            graphql_max_depth: DepthLimit::DEFAULT_MAX,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, applying defaults for absent keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(port) => port.parse().context("PORT must be a valid number")?,
                None => defaults.port,
            },
            graphql_max_depth: match lookup("GRAPHQL_MAX_DEPTH") {
                Some(depth) => depth
                    .parse()
                    .context("GRAPHQL_MAX_DEPTH must be a non-negative integer")?,
                None => defaults.graphql_max_depth,
            },
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
        })
    }

    pub fn depth_limit(&self) -> DepthLimit {
        DepthLimit::new(self.graphql_max_depth)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.graphql_max_depth, 6);
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("GRAPHQL_MAX_DEPTH", "3"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test,,"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.depth_limit().max(), 3);
        assert_eq!(config.allowed_origins, ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_numbers_are_errors() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        let err = config(&[("GRAPHQL_MAX_DEPTH", "-1")]).unwrap_err();
        assert!(err.to_string().contains("GRAPHQL_MAX_DEPTH"));
    }
}
