//! Filterable, selectable combo box
//!
//! [`ComboBox`] wires UI events into a [`SelectionController`] and forwards
//! the resulting [`Effect`]s to the callbacks in its [`ComboBoxProps`]. The
//! caller owns the selection: after an `on_change` it is expected to pass the
//! new selection back through [`Component::update`].

mod accessor;
mod candidate;
mod controller;
mod filter;
mod props;
mod view;

#[cfg(test)]
mod tests;

pub use accessor::Accessors;
pub use candidate::{Candidate, CreateLabel};
pub use controller::{reduce, Action, ComboBoxState, Effect, SelectionController, Transition};
pub use filter::{compute_candidates, FilterOptions};
pub use props::{ComboBoxProps, DEFAULT_NO_RESULTS_TEXT, DEFAULT_PLACEHOLDER};
pub use view::{render_combo_box, Part};

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use crate::component::{Component, ComponentError, ComponentId, Context, Node};
use crate::events::{
    bubble, Boundary, FocusEvent, Key, KeyKind, KeyboardEvent, ListenerGuard, PointerEvent,
    UiEvent,
};

/// Combo box component
pub struct ComboBox<T, K> {
    id: ComponentId,
    context: Context,
    props: ComboBoxProps<T, K>,
    controller: Arc<Mutex<SelectionController>>,
    /// Nodes that count as inside for click-away
    boundary: Boundary,
    /// Click-away registration, held while mounted
    guard: Option<ListenerGuard>,
}

impl<T, K> fmt::Debug for ComboBox<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboBox")
            .field("id", &self.id)
            .field("controller", &self.controller)
            .field("listening", &self.guard.is_some())
            .finish()
    }
}

impl<T, K> ComboBox<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    pub fn new(props: ComboBoxProps<T, K>, context: Context) -> Self {
        let id = ComponentId::new();
        Self {
            id,
            context,
            props,
            controller: Arc::new(Mutex::new(SelectionController::new())),
            boundary: Boundary::new(id),
            guard: None,
        }
    }

    /// Treat presses on `owner`'s nodes as inside this combo box. Used by
    /// components that wrap one.
    pub fn within(mut self, owner: ComponentId) -> Self {
        self.boundary = self.boundary.with(owner);
        self
    }

    pub fn props(&self) -> &ComboBoxProps<T, K> {
        &self.props
    }

    /// Snapshot of the interaction state
    pub fn state(&self) -> Result<ComboBoxState, ComponentError> {
        Ok(self.controller.lock()?.state().clone())
    }

    /// Current candidate list
    pub fn candidates(&self) -> Result<Vec<Candidate<T>>, ComponentError> {
        Ok(self.controller.lock()?.candidates(&self.props))
    }

    /// Whether the click-away listener is registered
    pub fn is_listening(&self) -> bool {
        self.guard.is_some()
    }

    /// Apply one action and fire the resulting callbacks
    pub fn dispatch(&self, action: Action<T>) -> Result<(), ComponentError> {
        self.dispatch_all(vec![action])
    }

    /// Apply actions in order. Callbacks run after the controller lock is
    /// released so they may call back into this component.
    fn dispatch_all(&self, actions: Vec<Action<T>>) -> Result<(), ComponentError> {
        if actions.is_empty() {
            return Ok(());
        }
        let effects: Vec<Effect<T>> = {
            let mut controller = self.controller.lock()?;
            actions
                .into_iter()
                .flat_map(|action| controller.apply(&self.props, action))
                .collect()
        };
        self.props.emit(effects);
        Ok(())
    }

    pub fn open(&self) -> Result<(), ComponentError> {
        self.dispatch(Action::Open)
    }

    pub fn close(&self) -> Result<(), ComponentError> {
        self.dispatch(Action::Close)
    }

    pub fn toggle_open(&self) -> Result<(), ComponentError> {
        self.dispatch(Action::Toggle)
    }

    pub fn set_filter_text(&self, text: impl Into<String>) -> Result<(), ComponentError> {
        self.dispatch(Action::SetText(text.into()))
    }

    pub fn select(&self, candidate: Candidate<T>) -> Result<(), ComponentError> {
        self.dispatch(Action::Select(candidate))
    }

    pub fn remove(&self, item: T) -> Result<(), ComponentError> {
        self.dispatch(Action::Remove(item))
    }

    pub fn clear(&self) -> Result<(), ComponentError> {
        self.dispatch(Action::Clear)
    }

    fn handle_pointer(&self, event: &PointerEvent) -> Result<(), ComponentError> {
        if !event.is_activation() {
            return Ok(());
        }
        let target = match &event.target {
            Some(target) if target.owner == self.id => target,
            Some(target) => return Err(ComponentError::UnknownTarget(target.to_string())),
            None => return Err(ComponentError::UnknownTarget("<none>".to_string())),
        };

        let (state, candidates) = {
            let controller = self.controller.lock()?;
            (controller.state().clone(), controller.candidates(&self.props))
        };
        let nodes = render_combo_box(self.id, &state, &self.props);
        let Some(root) = nodes.first() else {
            return Ok(());
        };
        if !root.contains(target) {
            return Err(ComponentError::UnknownTarget(target.to_string()));
        }

        let mut actions = Vec::new();
        bubble(root, target, |node, propagation| match Part::parse(node.key()) {
            Some(Part::Item(i)) => {
                if let Some(candidate) = candidates.get(i) {
                    actions.push(Action::Select(candidate.clone()));
                }
                propagation.stop_propagation();
            }
            Some(Part::ChipRemove(i)) => {
                if let Some(item) = self.props.selected_items.get(i) {
                    actions.push(Action::Remove(item.clone()));
                }
                propagation.stop_propagation();
            }
            Some(Part::Clear) => {
                actions.push(Action::Clear);
                propagation.stop_propagation();
            }
            Some(Part::NoResults) => propagation.stop_propagation(),
            Some(Part::Container) => actions.push(Action::Toggle),
            _ => {}
        });
        self.dispatch_all(actions)
    }

    fn handle_key(&self, event: &KeyboardEvent) -> Result<(), ComponentError> {
        let action = match (event.kind, &event.key) {
            (KeyKind::Down, Key::ArrowDown) => Action::HighlightNext,
            (KeyKind::Down, Key::ArrowUp) => Action::HighlightPrevious,
            (KeyKind::Down, Key::Enter) => Action::Confirm,
            (KeyKind::Down, Key::Backspace) => Action::RemoveLast,
            (KeyKind::Up, Key::Escape) => Action::Close,
            _ => return Ok(()),
        };
        self.dispatch(action)
    }
}

impl<T, K> Component for ComboBox<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    type Props = ComboBoxProps<T, K>;

    fn create(props: Self::Props, context: Context) -> Self {
        Self::new(props, context)
    }

    fn id(&self) -> ComponentId {
        self.id
    }

    fn mount(&mut self) -> Result<(), ComponentError> {
        if self.guard.is_some() {
            return Err(ComponentError::MountError(format!(
                "combo box {} is already listening for click-away",
                self.id
            )));
        }
        let controller = Arc::clone(&self.controller);
        let guard = self
            .context
            .document()
            .on_click_away(self.boundary.clone(), move |_| match controller.lock() {
                Ok(mut controller) => controller.dismiss(),
                Err(e) => log::warn!("click-away could not close combo box: {e}"),
            })?;
        log::debug!("combo box {} listening for click-away", self.id);
        self.guard = Some(guard);
        Ok(())
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.controller.lock()?.sync(&props);
        self.props = props;
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), ComponentError> {
        if self.guard.take().is_some() {
            log::debug!("combo box {} released click-away listener", self.id);
        }
        self.controller.lock()?.dismiss();
        Ok(())
    }

    fn handle_event(&mut self, event: &UiEvent) -> Result<(), ComponentError> {
        match event {
            UiEvent::Pointer(pointer) => self.handle_pointer(pointer),
            UiEvent::Keyboard(key) => self.handle_key(key),
            UiEvent::Input(input) => {
                self.dispatch_all(vec![Action::Open, Action::SetText(input.value.clone())])
            }
            UiEvent::Focus(FocusEvent::Focus) => self.open(),
            UiEvent::Focus(FocusEvent::Blur) => Ok(()),
        }
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let controller = self.controller.lock()?;
        Ok(render_combo_box(self.id, controller.state(), &self.props))
    }
}
