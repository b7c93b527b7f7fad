use std::io;
use thiserror::Error;

use crate::actors::messages::ActorError;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The rule core never produces one of these for an ordinary request; "no match"
/// is always answered with a fallback response. Errors only surface while building
/// the knowledge tables, loading configuration, or at the generative boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A static knowledge table failed validation. Fatal at initialization.
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents errors specific to the actor system, such as communication failures.
    #[error("Actor error: {0}")]
    Actor(#[from] ActorError),

    /// The external text-generation collaborator failed or answered badly.
    #[error("Collaborator error: {0}")]
    Collaborator(String),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::KnowledgeBase(s) => AppError::KnowledgeBase(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Collaborator(s) => AppError::Collaborator(s.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Timeout(s) => AppError::Timeout(s.clone()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Collaborator(format!("HTTP error: {}", err))
    }
}
