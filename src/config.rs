// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    /// Origins the frontend is served from.
    pub cors_origins: Vec<String>,
    /// Upper bound for any request body (notes, sanitize payloads).
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Config {
    /// Reads configuration from the environment (and `.env`, if present).
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| parse_list(&raw))
            .ok()
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        Self {
            bind_addr: parse_var("BIND_ADDR", defaults.bind_addr),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            cors_origins,
            max_body_bytes: parse_var("MAX_BODY_BYTES", defaults.max_body_bytes),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            // The subscriber is not up yet, so this goes straight to stderr.
            eprintln!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Splits a comma separated list, dropping blanks.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_list(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.max_body_bytes, 65536);
        assert_eq!(config.cors_origins.len(), 2);
    }
}
