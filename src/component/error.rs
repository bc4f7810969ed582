//! Error types for component operations

use thiserror::Error;

use crate::component::LifecyclePhase;
use crate::events::EventError;

/// Errors that can occur during component operations
#[derive(Debug, Error)]
pub enum ComponentError {
    /// Error acquiring lock
    #[error("Lock error: {0}")]
    LockError(String),

    /// Invalid lifecycle transition
    #[error("Invalid lifecycle transition: cannot {1} while in {0:?} phase")]
    InvalidLifecycleTransition(LifecyclePhase, String),

    /// An event targeted a node this component never rendered
    #[error("Unknown event target: {0}")]
    UnknownTarget(String),

    /// Error mounting component
    #[error("Error mounting component: {0}")]
    MountError(String),

    /// Error from the event system
    #[error(transparent)]
    Event(#[from] EventError),
}

impl<T> From<std::sync::PoisonError<T>> for ComponentError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        ComponentError::LockError(error.to_string())
    }
}
