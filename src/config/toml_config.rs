use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_PATH, DEFAULT_REQUESTS_FILE,
    DEFAULT_RESPONSES_FILE, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{BridgeError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_file: Option<String>,
    pub output_path: Option<String>,
    pub requests_file: Option<String>,
    pub responses_file: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BridgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BridgeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SERVICE_BASE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BridgeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.service.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl ConfigProvider for TomlConfig {
    fn service_base_url(&self) -> &str {
        self.service.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }

    fn input_file(&self) -> &str {
        self.batch.input_file.as_deref().unwrap_or(DEFAULT_INPUT_FILE)
    }

    fn output_path(&self) -> &str {
        self.batch.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn requests_file(&self) -> &str {
        self.batch
            .requests_file
            .as_deref()
            .unwrap_or(DEFAULT_REQUESTS_FILE)
    }

    fn responses_file(&self) -> &str {
        self.batch
            .responses_file
            .as_deref()
            .unwrap_or(DEFAULT_RESPONSES_FILE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("service.base_url", self.service_base_url())?;
        validate_range(
            "service.timeout_seconds",
            self.timeout_seconds(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validate_path("batch.input_file", self.input_file())?;
        validate_path("batch.output_path", self.output_path())?;
        validate_file_name("batch.requests_file", self.requests_file())?;
        validate_file_name("batch.responses_file", self.responses_file())?;
        Ok(())
    }
}
