//! Error types for the console engine

use thiserror::Error;

/// Message used when neither the backend nor the transport explain a failure
pub const FALLBACK_MESSAGE: &str = "Unknown error";

/// A resource declaration that cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate field name '{0}'")]
    DuplicateField(String),

    #[error("select field '{0}' has no options")]
    EmptyOptions(String),

    #[error("number field '{field}' has min {min} greater than max {max}")]
    InvertedRange { field: String, min: i64, max: i64 },

    #[error("field name must not be empty")]
    UnnamedField,
}

/// Failure of a remote CRUD call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The backend answered with an error payload
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    /// The request never completed
    #[error("{0}")]
    Transport(String),

    /// The response could not be understood
    #[error("{0}")]
    Decode(String),
}

impl ServiceError {
    /// Message shown to the user: the backend's own explanation when it gave
    /// one, the generic error text otherwise, and a fixed fallback last.
    pub fn user_message(&self) -> String {
        if let ServiceError::Rejected {
            message: Some(message),
            ..
        } = self
        {
            if !message.trim().is_empty() {
                return message.clone();
            }
        }

        let generic = match self {
            ServiceError::Rejected {
                code: Some(code), ..
            } if !code.is_empty() => code.clone(),
            other => other.to_string(),
        };

        if generic.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            generic
        }
    }
}

/// A form value that cannot be converted for transmission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("{label} must be a whole number, got '{value}'")]
    NotAnInteger { label: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_payload() {
        let error = ServiceError::Rejected {
            status: 400,
            code: Some("invalid_argument".to_string()),
            message: Some("cpu: must be at most 32".to_string()),
        };
        assert_eq!(error.user_message(), "cpu: must be at most 32");
    }

    #[test]
    fn test_user_message_generic() {
        let error = ServiceError::Rejected {
            status: 503,
            code: Some("unavailable".to_string()),
            message: Some("  ".to_string()),
        };
        assert_eq!(error.user_message(), "unavailable");

        let error = ServiceError::Rejected {
            status: 500,
            code: None,
            message: None,
        };
        assert_eq!(error.user_message(), "request rejected with status 500");

        let error = ServiceError::Transport("connection refused".to_string());
        assert_eq!(error.user_message(), "connection refused");
    }

    #[test]
    fn test_user_message_fallback() {
        let error = ServiceError::Transport(String::new());
        assert_eq!(error.user_message(), FALLBACK_MESSAGE);
    }
}
