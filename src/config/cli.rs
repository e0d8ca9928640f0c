use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_PATH, DEFAULT_REQUESTS_FILE,
    DEFAULT_RESPONSES_FILE, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "customer-bridge")]
#[command(about = "Batch customer lookups against the legacy XML service, in JSON")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    pub input_file: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_REQUESTS_FILE)]
    pub requests_file: String,

    #[arg(long, default_value = DEFAULT_RESPONSES_FILE)]
    pub responses_file: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load settings from a TOML file instead of the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Answer with sample accounts instead of calling the service")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn service_base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn requests_file(&self) -> &str {
        &self.requests_file
    }

    fn responses_file(&self) -> &str {
        &self.responses_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("input_file", &self.input_file)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_name("requests_file", &self.requests_file)?;
        validate_file_name("responses_file", &self.responses_file)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}
