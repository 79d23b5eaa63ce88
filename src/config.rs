use crate::error::{KeihiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub email: Option<String>,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
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
            .ok_or_else(|| KeihiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("keihi").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_url: None,
            email: None,
            timeout_seconds: 30,
        }
    }

    pub fn get_api_url(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(url) = std::env::var("KEIHI_API_URL") {
            return Ok(url);
        }

        self.api_url.clone().ok_or(KeihiError::MissingApiUrl)
    }

    pub fn get_email(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(email) = std::env::var("KEIHI_EMAIL") {
            return Ok(email);
        }

        self.email.clone().ok_or(KeihiError::MissingEmail)
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.api_url = Some(url);
        self.save()
    }

    pub fn set_email(&mut self, email: String) -> Result<()> {
        self.email = Some(email);
        self.save()
    }

    /// ストア呼び出しのタイムアウト秒数（0は既定値扱い）
    pub fn timeout_or_default(&self) -> u64 {
        if self.timeout_seconds == 0 {
            30
        } else {
            self.timeout_seconds
        }
    }
}
