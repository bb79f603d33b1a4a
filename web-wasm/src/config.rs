//! Build-time application configuration
//!
//! The API base URL and deployment mode come from environment variables
//! baked in at compile time. A missing base URL is fatal in production
//! and falls back to the localhost default in development.

const DEV_FALLBACK_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub app_env: AppEnv,
    pub use_mock: bool,
}

impl AppConfig {
    pub fn from_build_env() -> Result<Self, String> {
        Self::from_parts(
            option_env!("RESUME_AI_API_BASE_URL"),
            option_env!("RESUME_AI_APP_ENV"),
            option_env!("RESUME_AI_USE_MOCK"),
        )
    }

    fn from_parts(
        api_base_url: Option<&str>,
        app_env: Option<&str>,
        use_mock: Option<&str>,
    ) -> Result<Self, String> {
        let app_env = match app_env {
            Some("production") => AppEnv::Production,
            _ => AppEnv::Development,
        };
        let use_mock = matches!(use_mock, Some("1") | Some("true"));

        let api_base_url = match api_base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                if app_env == AppEnv::Production {
                    return Err(
                        "RESUME_AI_API_BASE_URL must be set for production builds".to_string()
                    );
                }
                warn(&format!(
                    "RESUME_AI_API_BASE_URL not set; using development fallback {}",
                    DEV_FALLBACK_URL
                ));
                DEV_FALLBACK_URL.to_string()
            }
        };

        Ok(Self {
            api_base_url,
            app_env,
            use_mock,
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env == AppEnv::Development
    }
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url() {
        let config =
            AppConfig::from_parts(Some("https://api.example.com/"), Some("production"), None)
                .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.app_env, AppEnv::Production);
        assert!(!config.use_mock);
    }

    #[test]
    fn test_development_fallback() {
        let config = AppConfig::from_parts(None, None, None).unwrap();
        assert_eq!(config.api_base_url, DEV_FALLBACK_URL);
        assert!(config.is_development());
    }

    #[test]
    fn test_production_requires_base_url() {
        let result = AppConfig::from_parts(None, Some("production"), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_flag() {
        assert!(AppConfig::from_parts(None, None, Some("1")).unwrap().use_mock);
        assert!(AppConfig::from_parts(None, None, Some("true")).unwrap().use_mock);
        assert!(!AppConfig::from_parts(None, None, Some("0")).unwrap().use_mock);
    }
}
