// Core module of the combokit component library
pub mod component;
pub mod events;
pub mod platform;

pub mod kit;

/// Version of the combokit library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{
        callback, Callback, Component, ComponentError, ComponentId, Context, LifecycleManager,
        LifecyclePhase, Node, NodeId,
    };
    pub use crate::events::{
        Boundary, DocumentListeners, FocusEvent, InputEvent, Key, KeyboardEvent, ListenerGuard,
        PointerEvent, PointerKind, UiEvent,
    };
    pub use crate::kit::prelude::*;
    pub use crate::platform::{HeadlessPlatform, PlatformAdapter};
}

/// Errors that can occur in combokit
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Component error: {0}")]
    Component(#[from] component::ComponentError),

    #[error("Event error: {0}")]
    Event(#[from] events::EventError),

    #[error("Platform error: {0}")]
    Platform(String),
}
