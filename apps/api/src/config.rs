use std::str::FromStr;

use anyhow::{Context, Result};

/// Which LLM vendor backs the analysis endpoint.
/// Selected at startup via `LLM_PROVIDER`; the endpoint logic is identical
/// for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Deepseek,
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "deepseek" => Ok(ProviderKind::Deepseek),
            "gemini" => Ok(ProviderKind::Gemini),
            other => {
                anyhow::bail!("Unknown LLM_PROVIDER '{other}' (expected 'deepseek' or 'gemini')")
            }
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if the selected provider's API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub api_key: String,
    /// CORS origin allowed to call the analysis endpoint.
    /// `None` means wildcard — acceptable locally, tighten in deployment.
    pub allowed_origin: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = std::env::var("LLM_PROVIDER")
            .unwrap_or_else(|_| "deepseek".to_string())
            .parse::<ProviderKind>()?;

        let api_key = match provider {
            ProviderKind::Deepseek => require_env("DEEPSEEK_API_KEY")?,
            ProviderKind::Gemini => require_env("GEMINI_API_KEY")?,
        };

        Ok(Config {
            provider,
            api_key,
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty() && origin != "*"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parses_both_vendors() {
        assert_eq!(
            "deepseek".parse::<ProviderKind>().unwrap(),
            ProviderKind::Deepseek
        );
        assert_eq!("gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
    }

    #[test]
    fn test_provider_kind_is_case_insensitive() {
        assert_eq!(
            "Deepseek".parse::<ProviderKind>().unwrap(),
            ProviderKind::Deepseek
        );
        assert_eq!("GEMINI".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
    }

    #[test]
    fn test_provider_kind_rejects_unknown_vendor() {
        assert!("openai".parse::<ProviderKind>().is_err());
        assert!("".parse::<ProviderKind>().is_err());
    }
}
