use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which validator runs on the decoded model output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputValidation {
    /// Return whatever JSON the model produced.
    #[default]
    Trust,
    /// Require the documented report schema.
    Strict,
}

impl OutputValidation {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputValidation::Trust => "trust",
            OutputValidation::Strict => "strict",
        }
    }
}

impl std::str::FromStr for OutputValidation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trust" => Ok(OutputValidation::Trust),
            "strict" => Ok(OutputValidation::Strict),
            other => bail!("unknown output validation mode '{other}' (expected 'trust' or 'strict')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Built once at startup; request handling never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_timeout: Duration,
    pub output_validation: OutputValidation,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            llm_timeout: Duration::from_secs(
                std::env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            output_validation: std::env::var("HBDI_OUTPUT_VALIDATION")
                .unwrap_or_else(|_| "trust".to_string())
                .parse()
                .context("HBDI_OUTPUT_VALIDATION is invalid")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Full URL of the chat completions endpoint.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.openai_base_url.trim_end_matches('/')
        )
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Config used by unit tests; points at an address nothing listens on.
#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        openai_api_key: "sk-test".to_string(),
        openai_base_url: "http://127.0.0.1:9/v1".to_string(),
        llm_timeout: Duration::from_secs(30),
        output_validation: OutputValidation::Trust,
        port: 8000,
        rust_log: "info".to_string(),
    }
}
