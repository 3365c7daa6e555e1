use thiserror::Error;

use crate::remote::ApiError;
use crate::utils::validation::ValidationError;

#[derive(Error, Debug)]
pub enum BugboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),

    #[error("invalid severity '{0}', expected one of: Critical, High, Medium, Low")]
    InvalidSeverity(String),

    #[error("invalid status '{0}', expected one of: Open, In Progress, Resolved, Closed")]
    InvalidStatus(String),

    #[error("a bug submission is already in progress")]
    SubmissionInProgress,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl BugboardError {
    /// True for errors raised locally before any request was dispatched.
    pub fn is_validation(&self) -> bool {
        matches!(self, BugboardError::Validation(_))
    }

    /// The normalized remote error, if this error came from the service.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            BugboardError::Api(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BugboardError>;
