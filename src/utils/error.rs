use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvError {
    #[error("Failed to read input '{path}': {source}")]
    InputReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse resume '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output '{path}': {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

/// 錯誤分類，用於日誌與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Config,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CvError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CvError::InputReadError { .. } | CvError::ParseError { .. } => ErrorCategory::Input,
            CvError::OutputWriteError { .. } => ErrorCategory::Output,
            CvError::ConfigError { .. }
            | CvError::InvalidConfigValueError { .. }
            | CvError::ConfigValidationError { .. } => ErrorCategory::Config,
            CvError::IoError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CvError::InputReadError { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            CvError::ParseError { .. } => {
                "Make sure the resume is valid JSON and list fields (work, skills, ...) are arrays"
                    .to_string()
            }
            CvError::OutputWriteError { path, .. } => {
                format!("Check that the directory for '{}' exists and is writable", path)
            }
            CvError::ConfigError { .. } | CvError::ConfigValidationError { .. } => {
                "Review the TOML configuration file".to_string()
            }
            CvError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            CvError::IoError(_) => {
                "Re-run with --verbose and report the log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not load the resume: {}", self),
            ErrorCategory::Output => format!("Could not write the document: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::Internal => format!("Unexpected failure: {}", self),
        }
    }

    /// 根據嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CvError>;
