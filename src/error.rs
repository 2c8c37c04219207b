//! Error types for the workout planner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Strategy already registered: {0}")]
    DuplicateStrategy(String),

    #[error("Strategy not registered: {0}")]
    UnknownStrategy(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
