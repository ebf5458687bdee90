//! Core error types

use thiserror::Error;

/// Core compositor errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Method called from the wrong thread")]
    WrongThread,

    #[error("Compositor already attached to an event loop")]
    AlreadyAttached,

    #[error("Compositor already destroyed")]
    Destroyed,

    #[error("Engine error: {0}")]
    EngineError(String),
}

impl CoreError {
    pub fn engine_error(msg: impl Into<String>) -> Self {
        Self::EngineError(msg.into())
    }

    /// Precondition violations are caller bugs; engine errors are not.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::WrongThread | Self::AlreadyAttached | Self::Destroyed
        )
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
