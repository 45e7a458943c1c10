use anyhow::{Context, Result};

/// Environment variable holding the completion provider credential.
/// Read per request through `CredentialSource`, never at startup.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Where the provider credential comes from.
///
/// Production reads the process environment on every request so a missing key
/// fails only the request that needed it. Tests pin a value instead.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    Env(&'static str),
    Fixed(Option<String>),
}

impl CredentialSource {
    /// Returns the credential, treating a blank value as absent.
    pub fn resolve(&self) -> Option<String> {
        let value = match self {
            CredentialSource::Env(key) => std::env::var(key).ok(),
            CredentialSource::Fixed(value) => value.clone(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Name shown in operator logs. Never sent to clients.
    pub fn describe(&self) -> &str {
        match self {
            CredentialSource::Env(key) => key,
            CredentialSource::Fixed(_) => "fixed credential",
        }
    }
}

impl Default for CredentialSource {
    fn default() -> Self {
        CredentialSource::Env(API_KEY_VAR)
    }
}
