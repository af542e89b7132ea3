use crate::error::{AppError, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LINK_HOST: &str = "qshare.ai";

/// Runtime configuration.
///
/// The API key is optional at load time: a missing credential is reported
/// when a caption is requested, not when the app starts.
#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub model_name: String,
    pub link_host: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists, ignore if it doesn't
        let _ = dotenv();

        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model_name = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let link_host =
            env::var("QUICK_SHARE_LINK_HOST").unwrap_or_else(|_| DEFAULT_LINK_HOST.to_string());

        Self::builder()
            .with_optional_api_key(api_key)
            .with_model(model_name)
            .with_link_host(link_host)
            .build()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Model path in the form the Gemini REST API expects (`models/<name>`).
    pub fn model_path(&self) -> String {
        if self.model_name.starts_with("models/") {
            self.model_name.clone()
        } else {
            format!("models/{}", self.model_name)
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

#[derive(Default)]
pub struct ConfigBuilder {
    api_key: Option<String>,
    model: Option<String>,
    link_host: Option<String>,
}

impl ConfigBuilder {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_link_host(mut self, host: impl Into<String>) -> Self {
        self.link_host = Some(host.into());
        self
    }

    pub fn build(self) -> Result<Config> {
        let model_name = self
            .model
            .map(|m| m.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        if model_name.is_empty() || model_name == "models/" {
            return Err(AppError::config("model name must not be empty"));
        }

        let link_host = self
            .link_host
            .map(|h| h.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_LINK_HOST.to_string());
        if link_host.is_empty() || link_host.contains("://") || link_host.contains('/') {
            return Err(AppError::config(format!("invalid link host: {link_host:?}")));
        }

        Ok(Config {
            gemini_api_key: self.api_key.filter(|k| !k.trim().is_empty()),
            model_name,
            link_host,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.model_name, DEFAULT_MODEL);
        assert_eq!(config.link_host, DEFAULT_LINK_HOST);
        assert!(!config.has_api_key());
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config::builder().with_api_key("   ").build().unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn model_path_adds_prefix_once() {
        let config = Config::builder().with_model("gemini-flash-latest").build().unwrap();
        assert_eq!(config.model_path(), "models/gemini-flash-latest");

        let config = Config::builder().with_model("models/gemini-2.5-pro").build().unwrap();
        assert_eq!(config.model_path(), "models/gemini-2.5-pro");
    }

    #[test]
    fn rejects_bad_link_host() {
        assert!(Config::builder().with_link_host("https://qshare.ai").build().is_err());
        assert!(Config::builder().with_link_host("").build().is_err());

        let config = Config::builder().with_link_host("share.example/").build().unwrap();
        assert_eq!(config.link_host, "share.example");
    }

    #[test]
    fn rejects_empty_model() {
        let err = Config::builder().with_model("  ").build().unwrap_err();
        assert!(err.is_configuration());
    }
}
