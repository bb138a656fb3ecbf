//! Clio 통합 설정
//!
//! Priority: CLI flags (applied by the caller) > environment variables >
//! `~/.clio/config.toml` > built-in defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_TOKENS: u32 = 400;

/// 설정 파일 경로 (~/.clio/config.toml)
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".clio")
        .join("config.toml")
}

/// Clio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClioConfig {
    /// OpenRouter API key
    pub api_key: Option<String>,

    /// Model identifier sent to the provider
    pub model: String,

    /// Chat completions endpoint
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Completion token budget
    pub max_tokens: u32,
}

impl Default for ClioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ClioConfig {
    /// 설정 로드 (파일 + 환경 변수)
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file().unwrap_or_default();
        config.apply_env();
        Ok(config)
    }

    fn load_file() -> Option<Self> {
        let path = config_path();
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring malformed config at {}: {}", path.display(), e);
                None
            }
        }
    }

    /// 환경 변수가 파일 설정보다 우선
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("CLIO_MODEL") {
            if !model.trim().is_empty() {
                self.model = model;
            }
        }
        if let Ok(url) = std::env::var("CLIO_BASE_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }

    /// 설정 저장
    pub fn save(&self) -> Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// API 키 확인 - 모델 호출 전에 한 번만 검사
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClioConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_missing_credential() {
        let config = ClioConfig {
            api_key: None,
            ..Default::default()
        };
        assert!(matches!(
            config.require_api_key(),
            Err(Error::MissingCredential)
        ));

        let config = ClioConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClioConfig {
            api_key: Some("sk-or-test".to_string()),
            model: "test/model".to_string(),
            ..Default::default()
        };
        let serialized = toml::to_string(&config).unwrap();
        let parsed: ClioConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.api_key.as_deref(), Some("sk-or-test"));
        assert_eq!(parsed.model, "test/model");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: ClioConfig = toml::from_str("model = \"custom/model\"").unwrap();
        assert_eq!(parsed.model, "custom/model");
        assert_eq!(parsed.base_url, DEFAULT_BASE_URL);
        assert_eq!(parsed.max_tokens, DEFAULT_MAX_TOKENS);
    }
}
