//! Document-level listener registry for click-away handling
//!
//! Components that need to react to presses outside themselves register a
//! handler together with the [`Boundary`] of their subtree. The host (or the
//! `web` platform bridge) feeds every document pointer-down / touch-start into
//! [`DocumentListeners::dispatch`]; handlers whose boundary does not contain the
//! event target are invoked.
//!
//! Registration returns a [`ListenerGuard`]. Dropping the guard deregisters
//! the handler, so a listener can never outlive the component holding it.

use std::sync::{Arc, Mutex, Weak};

use crate::component::{ComponentId, NodeId};
use crate::events::{EventError, PointerEvent};

/// Type for click-away callbacks
type ClickAwayHandler = Arc<dyn Fn(&PointerEvent) + Send + Sync>;

/// Set of components whose rendered nodes count as "inside"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundary {
    owners: Vec<ComponentId>,
}

impl Boundary {
    /// Boundary covering a single component's subtree
    pub fn new(owner: ComponentId) -> Self {
        Self {
            owners: vec![owner],
        }
    }

    /// Boundary that contains nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extend the boundary with a nested component
    pub fn with(mut self, owner: ComponentId) -> Self {
        if !self.owners.contains(&owner) {
            self.owners.push(owner);
        }
        self
    }

    /// Whether the target lies inside the boundary. A missing target is
    /// always outside.
    pub fn contains(&self, target: Option<&NodeId>) -> bool {
        target.is_some_and(|id| self.owners.contains(&id.owner))
    }
}

struct Listener {
    id: u64,
    boundary: Boundary,
    handler: ClickAwayHandler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Registry of document-level click-away listeners
#[derive(Clone, Default)]
pub struct DocumentListeners {
    registry: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for DocumentListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentListeners")
            .field("listeners", &format!("[{} listeners]", self.listener_count()))
            .finish()
    }
}

impl DocumentListeners {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` to run on every press outside `boundary`
    pub fn on_click_away(
        &self,
        boundary: Boundary,
        handler: impl Fn(&PointerEvent) + Send + Sync + 'static,
    ) -> Result<ListenerGuard, EventError> {
        let mut registry = self.registry.lock()?;
        registry.next_id += 1;
        let id = registry.next_id;
        registry.listeners.push(Listener {
            id,
            boundary,
            handler: Arc::new(handler),
        });
        log::trace!("registered click-away listener {id}");

        Ok(ListenerGuard {
            id,
            registry: Arc::downgrade(&self.registry),
        })
    }

    /// Deliver a document pointer event. Only presses (pointer down, touch
    /// start) are considered. Returns how many handlers ran.
    pub fn dispatch(&self, event: &PointerEvent) -> Result<usize, EventError> {
        if !event.is_press() {
            return Ok(0);
        }

        // Snapshot matching handlers so they may (de)register while running
        let handlers: Vec<ClickAwayHandler> = {
            let registry = self.registry.lock()?;
            registry
                .listeners
                .iter()
                .filter(|listener| !listener.boundary.contains(event.target.as_ref()))
                .map(|listener| listener.handler.clone())
                .collect()
        };

        for handler in &handlers {
            handler(event);
        }
        Ok(handlers.len())
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .map(|registry| registry.listeners.len())
            .unwrap_or(0)
    }
}

/// Keeps a click-away listener registered; dropping it deregisters
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        match registry.lock() {
            Ok(mut registry) => {
                registry.listeners.retain(|listener| listener.id != self.id);
                log::trace!("deregistered click-away listener {}", self.id);
            }
            Err(e) => log::warn!("failed to deregister listener {}: {}", self.id, e),
        };
    }
}
