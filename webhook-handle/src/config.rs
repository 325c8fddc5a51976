//! Configuration module for environment variable parsing.
//!
//! All configuration is read once at startup. Handlers receive an
//! immutable copy through shared state and never touch the environment
//! at request time.

use std::env;

/// Origins allowed when `ALLOWED_ORIGINS` is not set.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:4321,https://vividsuite.io";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Origins allowed to call the service cross-origin
    pub allowed_origins: Vec<String>,

    /// Whether to additionally allow any https://*.netlify.app origin
    pub allow_netlify_wildcard: bool,

    /// Shared secret for signature verification (empty = verification skipped)
    pub webhook_secret: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Malformed values never fail the load; they degrade to defaults.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8004),

            allowed_origins: parse_csv("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS),

            allow_netlify_wildcard: parse_bool("ALLOW_NETLIFY_WILDCARD", true),

            webhook_secret: env::var("WEBHOOK_SECRET").unwrap_or_default(),
        }
    }
}

/// Parse a boolean from the truthy token set "1", "true", "yes", "on"
/// (case-insensitive, whitespace trimmed). Any other value is false.
fn parse_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => matches!(
            raw.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

/// Parse a comma-separated list of strings, trimming entries and dropping
/// empty ones.
fn parse_csv(name: &str, default: &str) -> Vec<String> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_truthy_tokens() {
        for value in ["1", "true", "YES", " on ", "True"] {
            env::set_var("TEST_BOOL_TRUTHY", value);
            assert!(parse_bool("TEST_BOOL_TRUTHY", false), "value: {value:?}");
        }
        env::remove_var("TEST_BOOL_TRUTHY");
    }

    #[test]
    fn test_parse_bool_falsy_tokens() {
        for value in ["0", "false", "no", "off", "junk", ""] {
            env::set_var("TEST_BOOL_FALSY", value);
            assert!(!parse_bool("TEST_BOOL_FALSY", true), "value: {value:?}");
        }
        env::remove_var("TEST_BOOL_FALSY");
    }

    #[test]
    fn test_parse_bool_default() {
        assert!(parse_bool("NONEXISTENT_BOOL_VAR", true));
        assert!(!parse_bool("NONEXISTENT_BOOL_VAR", false));
    }

    #[test]
    fn test_parse_csv_trims_and_drops_empty() {
        env::set_var("TEST_CSV_ORIGINS", " https://a.example , ,https://b.example,");
        let result = parse_csv("TEST_CSV_ORIGINS", "");
        assert_eq!(
            result,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );
        env::remove_var("TEST_CSV_ORIGINS");
    }

    #[test]
    fn test_parse_csv_default() {
        let result = parse_csv("NONEXISTENT_CSV_VAR", DEFAULT_ALLOWED_ORIGINS);
        assert_eq!(
            result,
            vec![
                "http://localhost:4321".to_string(),
                "https://vividsuite.io".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_csv_empty_default() {
        let result = parse_csv("NONEXISTENT_CSV_VAR", "");
        assert!(result.is_empty());
    }
}
