use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The provider credential is intentionally optional at startup: a missing
/// key is a per-request configuration error, not a boot failure. The process
/// must keep serving (and answering /health) in a misconfigured deployment.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key. `None` means every roast request fails with a
    /// configuration error until the deployment is fixed.
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
