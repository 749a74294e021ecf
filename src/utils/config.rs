// src/utils/config.rs
use secrecy::SecretString;
use std::path::PathBuf;

pub const REFRESH_TOKEN_VAR: &str = "REFRESH_TOKEN";
pub const DEFAULT_BASE_URL: &str = "https://api.jquants.com";
pub const DEFAULT_LISTINGS_PATH: &str = "data/tse_listings.csv";

/// Runtime settings shared by every subcommand.
#[derive(Debug)]
pub struct Config {
    pub base_url: String,
    pub listings_path: PathBuf,
    /// `None` when the variable is unset or empty. The auth step turns that
    /// into a missing-credential error so lookup failures surface first.
    pub refresh_token: Option<SecretString>,
}

impl Config {
    pub fn new(base_url: impl Into<String>, listings_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            listings_path: listings_path.into(),
            refresh_token: read_refresh_token(),
        }
    }
}

/// Reads `REFRESH_TOKEN`, treating an empty value as unset.
pub fn read_refresh_token() -> Option<SecretString> {
    refresh_token_from(std::env::var(REFRESH_TOKEN_VAR).ok())
}

fn refresh_token_from(value: Option<String>) -> Option<SecretString> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(SecretString::from(value)),
        Some(_) => {
            tracing::debug!("{} is set but empty", REFRESH_TOKEN_VAR);
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_new_keeps_paths() {
        let config = Config::new(DEFAULT_BASE_URL, DEFAULT_LISTINGS_PATH);
        assert_eq!(config.base_url, "https://api.jquants.com");
        assert_eq!(config.listings_path, PathBuf::from("data/tse_listings.csv"));
    }

    #[test]
    fn test_empty_refresh_token_is_unset() {
        assert!(refresh_token_from(None).is_none());
        assert!(refresh_token_from(Some(String::new())).is_none());
        assert!(refresh_token_from(Some("  \t\n".to_string())).is_none());

        let token = refresh_token_from(Some("refresh-abc".to_string())).unwrap();
        assert_eq!(token.expose_secret(), "refresh-abc");
    }

    #[test]
    fn test_debug_redacts_refresh_token() {
        let config = Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            listings_path: PathBuf::from(DEFAULT_LISTINGS_PATH),
            refresh_token: Some(SecretString::from("very-secret".to_string())),
        };
        assert!(!format!("{:?}", config).contains("very-secret"));
        assert_eq!(config.refresh_token.as_ref().map(|t| t.expose_secret()), Some("very-secret"));
    }
}
