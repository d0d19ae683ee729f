use anyhow::{Result, bail};

const DEFAULT_API_BASE: &str = "http://localhost:3003";

/// Runtime configuration for the directory console.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the employee service.
    pub api_base: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let api_base = std::env::var("DIRECTORY_API_BASE")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            bail!("DIRECTORY_API_BASE must be an http(s) URL, got {api_base}");
        }
        Ok(Self { api_base })
    }
}
