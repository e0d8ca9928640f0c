use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Malformed request: {reason}")]
    MalformedRequest { reason: String },

    #[error("Malformed XML response: {reason}")]
    MalformedXml { reason: String },

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    RemoteService,
    Storage,
    Serialization,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BridgeError {
    /// 穩定的錯誤代碼，寫入批次結果檔時使用
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::MalformedRequest { .. } => "malformed_request",
            BridgeError::MalformedXml { .. } => "malformed_xml",
            BridgeError::TransportError(_) => "transport_error",
            BridgeError::IoError(_) => "io_error",
            BridgeError::SerializationError(_) => "serialization_error",
            BridgeError::ConfigError { .. }
            | BridgeError::ConfigValidationError { .. }
            | BridgeError::InvalidConfigValueError { .. } => "config_error",
            BridgeError::ProcessingError { .. } => "processing_error",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::MalformedRequest { .. } => ErrorCategory::Request,
            BridgeError::MalformedXml { .. } | BridgeError::TransportError(_) => {
                ErrorCategory::RemoteService
            }
            BridgeError::IoError(_) => ErrorCategory::Storage,
            BridgeError::SerializationError(_) => ErrorCategory::Serialization,
            BridgeError::ConfigError { .. }
            | BridgeError::ConfigValidationError { .. }
            | BridgeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BridgeError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路問題通常可以重試
            BridgeError::TransportError(_) => ErrorSeverity::Medium,
            BridgeError::MalformedRequest { .. }
            | BridgeError::MalformedXml { .. }
            | BridgeError::SerializationError(_)
            | BridgeError::ProcessingError { .. } => ErrorSeverity::High,
            BridgeError::IoError(_)
            | BridgeError::ConfigError { .. }
            | BridgeError::ConfigValidationError { .. }
            | BridgeError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BridgeError::MalformedRequest { .. } => {
                "Send an envelope shaped like {\"customer_request\":{\"customer\":{\"cunbr\":\"<id>\"}}}"
                    .to_string()
            }
            BridgeError::MalformedXml { .. } => {
                "Check that the remote service still returns a well-formed XML document".to_string()
            }
            BridgeError::TransportError(_) => {
                "Check network connectivity and the service base URL, then retry".to_string()
            }
            BridgeError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            BridgeError::SerializationError(_) => {
                "Inspect the values being serialized for unsupported content".to_string()
            }
            BridgeError::ConfigError { .. } | BridgeError::ConfigValidationError { .. } => {
                "Fix the configuration file or flags and run again".to_string()
            }
            BridgeError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            BridgeError::ProcessingError { .. } => {
                "Inspect the input data; use --verbose for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Request => format!("The lookup request was rejected: {}", self),
            ErrorCategory::RemoteService => {
                format!("The customer service could not be used: {}", self)
            }
            ErrorCategory::Storage => format!("Could not read or write a file: {}", self),
            ErrorCategory::Serialization => format!("Could not encode the data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
        }
    }
}
