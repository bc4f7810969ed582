//! Event system for combokit components
//!
//! The event system provides:
//! - Typed event payloads for pointer, keyboard, text input and focus
//! - Bubbling propagation with stop-propagation support
//! - A document-level listener registry for click-away detection

pub mod delegation;
pub mod document;
pub mod event;

pub use delegation::{bubble, propagation_path, EventPropagation, PropagationPhase};
pub use document::{Boundary, DocumentListeners, ListenerGuard};
pub use event::{
    FocusEvent, InputEvent, Key, KeyKind, KeyboardEvent, PointerEvent, PointerKind, UiEvent,
};

use thiserror::Error;

/// Errors raised by the event system
#[derive(Debug, Error)]
pub enum EventError {
    /// The listener registry lock was poisoned
    #[error("Failed to lock document listeners: {0}")]
    LockError(String),
}

impl<T> From<std::sync::PoisonError<T>> for EventError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        EventError::LockError(error.to_string())
    }
}
