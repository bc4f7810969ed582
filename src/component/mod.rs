//! Component model for combokit
//!
//! This module contains all the types and traits related to the component model,
//! including lifecycle management, callbacks, and the rendered view tree.

mod context;
mod error;
mod lifecycle;
mod node;


// Re-export component module contents
pub use context::{callback, Callback, Context};
pub use error::ComponentError;
pub use lifecycle::LifecycleManager;
pub use node::{ComponentId, Node, NodeId};

use crate::events::UiEvent;

/// Lifecycle phase of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Component is created but not yet mounted
    Created,
    /// Component is being mounted
    Mounting,
    /// Component is fully mounted and operational
    Mounted,
    /// Component is about to be updated
    BeforeUpdate,
    /// Component is updating
    Updating,
    /// Component is being unmounted
    Unmounting,
    /// Component is unmounted and inactive
    Unmounted,
}

/// Component trait - implemented by all UI components
pub trait Component: Send + Sync + 'static {
    /// The props type for this component
    type Props: Clone + Send + Sync + 'static;

    /// Create a new component instance
    fn create(props: Self::Props, context: Context) -> Self
    where
        Self: Sized;

    /// Identifier stamped on every node this component renders
    fn id(&self) -> ComponentId;

    /// Mount component - called when component is first added to the tree.
    /// Acquire document-level resources here.
    fn mount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Called before component updates with new props
    fn before_update(&mut self, _new_props: &Self::Props) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Update component with new props
    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError>;

    /// Unmount component - called when component is removed from the tree.
    /// Release everything acquired in `mount`.
    fn unmount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Handle a UI event aimed at this component
    fn handle_event(&mut self, _event: &UiEvent) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Render component - returns child nodes
    fn render(&self) -> Result<Vec<Node>, ComponentError>;
}
