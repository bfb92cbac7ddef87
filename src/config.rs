// src/config.rs
use crate::application::{options::FriendlyIdOptions, ports::util::NormalizeOptions};
use crate::domain::slug::services::DEFAULT_MAX_ATTEMPTS;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    friendly_ids: FriendlyIdOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://friendly_ids.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_length() -> usize {
    255
}

fn default_reserved_words() -> Vec<String> {
    vec!["new".into(), "index".into()]
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got '{value}'")))
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let max_length = lookup("SLUG_MAX_LENGTH")
            .map(|v| parse_number::<usize>("SLUG_MAX_LENGTH", &v))
            .transpose()?
            .unwrap_or_else(default_max_length);
        if max_length == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_LENGTH must be greater than zero".into(),
            ));
        }

        let strip_diacritics = lookup("SLUG_STRIP_DIACRITICS")
            .map(|v| parse_flag("SLUG_STRIP_DIACRITICS", &v))
            .transpose()?
            .unwrap_or(false);
        let strip_non_ascii = lookup("SLUG_STRIP_NON_ASCII")
            .map(|v| parse_flag("SLUG_STRIP_NON_ASCII", &v))
            .transpose()?
            .unwrap_or(false);

        let reserved_words = lookup("SLUG_RESERVED_WORDS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_reserved_words);

        let max_attempts = lookup("SLUG_MAX_RETRIES")
            .map(|v| parse_number::<u32>("SLUG_MAX_RETRIES", &v))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_RETRIES must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            friendly_ids: FriendlyIdOptions {
                normalize: NormalizeOptions {
                    strip_diacritics,
                    strip_non_ascii,
                    max_length,
                },
                reserved_words,
                scoped: false,
                max_attempts,
            },
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn friendly_ids(&self) -> &FriendlyIdOptions {
        &self.friendly_ids
    }
}
