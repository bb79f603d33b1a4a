use crate::error::{ResumeAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEV_FALLBACK_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub app_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            app_env: "development".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        if let Ok(env) = std::env::var("RESUME_AI_APP_ENV") {
            config.app_env = env;
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ResumeAiError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("resume-ai").join("config.json"))
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// Resolve the analysis service base URL.
    ///
    /// Precedence: `RESUME_AI_API_BASE_URL` env var, then the configured
    /// value. A missing URL is fatal in production and falls back to the
    /// localhost default in development, with a warning.
    pub fn resolve_base_url(&self) -> Result<String> {
        if let Ok(url) = std::env::var("RESUME_AI_API_BASE_URL") {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }

        if let Some(url) = &self.api_base_url {
            return Ok(url.clone());
        }

        if self.is_production() {
            return Err(ResumeAiError::MissingBaseUrl);
        }

        tracing::warn!(
            "API base URL not set; falling back to {} for development",
            DEV_FALLBACK_URL
        );
        Ok(DEV_FALLBACK_URL.to_string())
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_base_url = Some(url);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_base_url.is_none());
        assert_eq!(config.app_env, "development");
        assert!(!config.is_production());
    }

    #[test]
    fn test_config_parse() {
        let json = r#"{"api_base_url": "https://analyzer.example.com", "app_env": "production"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://analyzer.example.com")
        );
        assert!(config.is_production());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            api_base_url: Some("http://localhost:9000".into()),
            app_env: "development".into(),
        };
        let restored: Config =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(restored.api_base_url.as_deref(), Some("http://localhost:9000"));
    }
}
