//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use sea_orm::ConnectOptions;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_CONNECT_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_connect_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field(
                "database_connect_timeout_secs",
                &self.database_connect_timeout_secs,
            )
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            database_connect_timeout_secs: DEFAULT_DB_CONNECT_TIMEOUT_SECS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            database_connect_timeout_secs: parse_var("DATABASE_CONNECT_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Pool options for the configured database.
    pub fn connect_options(&self) -> ConnectOptions {
        let timeout = Duration::from_secs(self.database_connect_timeout_secs);
        let mut options = ConnectOptions::new(self.database_url.clone());
        options
            .max_connections(self.database_max_connections)
            .connect_timeout(timeout)
            .acquire_timeout(timeout)
            .sqlx_logging(false);
        options
    }

    /// Apply command-line overrides on top of the environment values.
    pub fn with_server_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server_host = host;
        }
        if let Some(port) = port {
            self.server_port = port;
        }
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config {
            database_url: "postgres://admin:hunter2@db/users".to_string(),
            ..Config::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("[REDACTED]"));
    }

    #[test]
    fn test_server_overrides_replace_only_given_values() {
        let config = Config {
            server_host: "10.0.0.5".to_string(),
            server_port: 9100,
            ..Config::default()
        };

        let unchanged = config.clone().with_server_overrides(None, None);
        assert_eq!(unchanged.server_addr(), "10.0.0.5:9100");

        let port_only = config.clone().with_server_overrides(None, Some(9001));
        assert_eq!(port_only.server_addr(), "10.0.0.5:9001");

        let both = config.with_server_overrides(Some("127.0.0.1".to_string()), Some(9001));
        assert_eq!(both.server_addr(), "127.0.0.1:9001");
    }

    #[test]
    fn test_connect_options_use_configured_url() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 3,
            ..Config::default()
        };
        let options = config.connect_options();
        assert_eq!(options.get_url(), "sqlite::memory:");
        assert_eq!(options.get_max_connections(), Some(3));
    }
}
