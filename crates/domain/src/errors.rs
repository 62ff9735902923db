//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Plantao
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PlantaoError {
    /// Malformed or out-of-range input. Always recoverable by the caller.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The shift schedule has been locked and can no longer be edited.
    #[error("Locked: {0}")]
    Locked(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by the persistence gateway.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlantaoError {
    /// Stable label suitable for structured logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Locked(_) => "locked",
            Self::Conflict(_) => "conflict",
            Self::Forbidden(_) => "forbidden",
            Self::Config(_) => "config",
            Self::Persistence(_) => "persistence",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the caller can correct the input and retry.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal(_) | Self::Config(_))
    }
}

/// Result type alias for Plantao operations
pub type Result<T> = std::result::Result<T, PlantaoError>;
