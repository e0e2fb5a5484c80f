use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Probe failed for '{domain}': {message}")]
    ProbeError { domain: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Probe,
    Processing,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::IoError(_) => ErrorCategory::Io,
            CheckError::SerializationError(_) => ErrorCategory::Processing,
            CheckError::ProbeError { .. } => ErrorCategory::Probe,
            CheckError::ConfigError { .. } => ErrorCategory::Configuration,
            CheckError::ProcessingError { .. } => ErrorCategory::Processing,
            CheckError::ValidationError { .. } => ErrorCategory::Validation,
            CheckError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CheckError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入文件缺失或無法寫出結果,整個運行失敗
            CheckError::IoError(_) => ErrorSeverity::High,
            CheckError::SerializationError(_) => ErrorSeverity::High,
            // ping 無法啟動屬於環境問題,不是分類結果
            CheckError::ProbeError { .. } => ErrorSeverity::Critical,
            CheckError::ConfigError { .. } => ErrorSeverity::Medium,
            CheckError::ProcessingError { .. } => ErrorSeverity::High,
            CheckError::ValidationError { .. } => ErrorSeverity::Medium,
            CheckError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            CheckError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CheckError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input file exists and the path is correct".to_string()
            }
            CheckError::IoError(_) => {
                "Check file permissions and available disk space".to_string()
            }
            CheckError::SerializationError(_) => {
                "The summary report could not be encoded; please report this".to_string()
            }
            CheckError::ProbeError { .. } => {
                "Make sure the system 'ping' utility is installed and on PATH".to_string()
            }
            CheckError::ConfigError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::MissingConfigError { .. } => {
                "Run with --help and review the provided flags".to_string()
            }
            CheckError::ProcessingError { .. } => {
                "Inspect the input file for unexpected content".to_string()
            }
            CheckError::ValidationError { .. } => {
                "Fix the reported configuration value and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                format!("Input file not found: {}", e)
            }
            CheckError::IoError(e) => format!("File operation failed: {}", e),
            CheckError::ProbeError { domain, message } => {
                format!("Could not run ping for '{}': {}", domain, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_error_is_critical() {
        let err = CheckError::ProbeError {
            domain: "b.com".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Probe);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("b.com"));
    }

    #[test]
    fn test_missing_input_file_suggestion() {
        let err = CheckError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "direct",
        ));
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("input file exists"));
    }
}
