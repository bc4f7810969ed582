//! Component lifecycle management

use crate::component::{Component, ComponentError, Context, LifecyclePhase, Node};
use crate::events::UiEvent;

/// Manages the lifecycle of a component
///
/// Enforces the `Created -> Mounted -> Unmounted` ordering so that mount-time
/// resources are acquired exactly once and released exactly once.
pub struct LifecycleManager<C: Component> {
    /// Current phase of the component
    phase: LifecyclePhase,

    /// Component instance being managed
    component: C,
}

impl<C: Component> std::fmt::Debug for LifecycleManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("phase", &self.phase)
            .field("component", &self.component.id())
            .finish()
    }
}

impl<C: Component> LifecycleManager<C> {
    /// Create a new lifecycle manager for a component
    pub fn new(component: C) -> Self {
        Self {
            phase: LifecyclePhase::Created,
            component,
        }
    }

    /// Create the component from props and manage it
    pub fn create(props: C::Props, context: Context) -> Self {
        Self::new(C::create(props, context))
    }

    /// Get the current lifecycle phase
    pub fn current_phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Get a reference to the component instance
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component instance
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    fn expect_phase(
        &self,
        expected: LifecyclePhase,
        operation: &str,
    ) -> Result<(), ComponentError> {
        if self.phase != expected {
            return Err(ComponentError::InvalidLifecycleTransition(
                self.phase,
                operation.to_string(),
            ));
        }
        Ok(())
    }

    /// Mount the component to the tree
    pub fn mount(&mut self) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Created, "mount")?;

        self.phase = LifecyclePhase::Mounting;
        match self.component.mount() {
            Ok(()) => {
                self.phase = LifecyclePhase::Mounted;
                log::debug!("mounted component {}", self.component.id());
                Ok(())
            }
            Err(e) => {
                // Reset phase on error
                self.phase = LifecyclePhase::Created;
                Err(e)
            }
        }
    }

    /// Update the component with new props
    pub fn update(&mut self, props: C::Props) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "update")?;

        self.phase = LifecyclePhase::BeforeUpdate;
        let result = self.component.before_update(&props).and_then(|()| {
            self.phase = LifecyclePhase::Updating;
            self.component.update(props)
        });

        self.phase = LifecyclePhase::Mounted;
        result
    }

    /// Deliver an event to the mounted component
    pub fn dispatch(&mut self, event: &UiEvent) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "handle events")?;
        self.component.handle_event(event)
    }

    /// Unmount the component from the tree
    pub fn unmount(&mut self) -> Result<(), ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "unmount")?;

        self.phase = LifecyclePhase::Unmounting;
        let result = self.component.unmount();

        // The component is gone from the tree even if its cleanup failed
        self.phase = LifecyclePhase::Unmounted;
        log::debug!("unmounted component {}", self.component.id());
        result
    }

    /// Render the component
    pub fn render(&self) -> Result<Vec<Node>, ComponentError> {
        self.expect_phase(LifecyclePhase::Mounted, "render")?;
        self.component.render()
    }
}
