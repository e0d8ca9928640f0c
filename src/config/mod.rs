#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};

pub const DEFAULT_INPUT_FILE: &str = "input_data.txt";
pub const DEFAULT_OUTPUT_PATH: &str = ".";
pub const DEFAULT_REQUESTS_FILE: &str = "json_requests.txt";
pub const DEFAULT_RESPONSES_FILE: &str = "json_responses.txt";

/// 逾時上限 (秒)
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
