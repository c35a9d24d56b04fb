use serde::Serialize;
use thiserror::Error;

/// 呼叫端可見的錯誤，對應 callable 協議的 status 欄位
#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("The function must be called while authenticated.")]
    Unauthenticated,

    #[error("Could not create payment intent.")]
    Internal { details: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorStatus {
    Unauthenticated,
    Internal,
}

impl FunctionError {
    pub fn internal(source: &ProcessorError) -> Self {
        FunctionError::Internal {
            details: source.to_string(),
        }
    }

    pub fn status(&self) -> ErrorStatus {
        match self {
            FunctionError::Unauthenticated => ErrorStatus::Unauthenticated,
            FunctionError::Internal { .. } => ErrorStatus::Internal,
        }
    }

    /// Diagnostic detail forwarded to the caller, only set for internal failures.
    pub fn details(&self) -> Option<&str> {
        match self {
            FunctionError::Internal { details } => Some(details),
            FunctionError::Unauthenticated => None,
        }
    }
}

/// Failures of the outbound payment-processor call.
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Display is the processor's own message so callers see it verbatim.
    #[error("{message}")]
    Api {
        status: u16,
        kind: Option<String>,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response from payment processor: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Payment intent {id} was returned without a client secret")]
    MissingClientSecret { id: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FunctionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_carries_upstream_message() {
        let upstream = ProcessorError::Api {
            status: 400,
            kind: Some("invalid_request_error".to_string()),
            code: None,
            message: "amount must be positive".to_string(),
        };

        let err = FunctionError::internal(&upstream);
        assert_eq!(err.status(), ErrorStatus::Internal);
        assert_eq!(err.details(), Some("amount must be positive"));
        assert_eq!(err.to_string(), "Could not create payment intent.");
    }

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorStatus::Unauthenticated).unwrap();
        assert_eq!(json, "\"UNAUTHENTICATED\"");
        assert!(FunctionError::Unauthenticated.details().is_none());
    }
}
