//! Tag panel: read-only chips that turn into a multi-select combo box
//!
//! The panel is a two-state machine. In `Display` it shows the selection as
//! chips; a click, tap or focus moves it to `Editing`, where the full
//! [`ComboBox`] is shown. `Enter` or `Tab` (key up) and click-away return it
//! to `Display`.

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use crate::component::{Component, ComponentError, ComponentId, Context, Node, NodeId};
use crate::events::{
    Boundary, FocusEvent, Key, KeyKind, KeyboardEvent, ListenerGuard, PointerEvent, UiEvent,
};
use crate::kit::components::combo_box::{Accessors, ComboBox, ComboBoxProps};

/// Mode of a tag panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Read-only chips
    Display,
    /// Full combo box
    Editing,
}

/// Properties for the TagPanel component
#[derive(Debug)]
pub struct TagPanelProps<T, K> {
    /// Props for the inner combo box. Multi-select and clearable are
    /// always forced on.
    pub combo: ComboBoxProps<T, K>,
    /// Keep the panel in `Editing` permanently
    pub always_show_edit_panel: bool,
}

impl<T: Clone, K> Clone for TagPanelProps<T, K> {
    fn clone(&self) -> Self {
        Self {
            combo: self.combo.clone(),
            always_show_edit_panel: self.always_show_edit_panel,
        }
    }
}

impl<T, K> TagPanelProps<T, K>
where
    T: Clone,
    K: Eq + Hash,
{
    pub fn new(items: Vec<T>, selected_items: Vec<T>, accessors: Accessors<T, K>) -> Self {
        Self {
            combo: ComboBoxProps::new(items, selected_items, accessors),
            always_show_edit_panel: false,
        }
    }

    pub fn always_show_edit_panel(mut self, always: bool) -> Self {
        self.always_show_edit_panel = always;
        self
    }

    /// Adjust the inner combo box props
    pub fn with_combo(
        mut self,
        configure: impl FnOnce(ComboBoxProps<T, K>) -> ComboBoxProps<T, K>,
    ) -> Self {
        self.combo = configure(self.combo);
        self
    }

    /// Props handed to the inner combo box
    pub fn combo_props(&self) -> ComboBoxProps<T, K> {
        self.combo.clone().multi_select(true).clearable(true)
    }

    /// Mode the panel is held in regardless of interaction, if any
    pub fn pinned_mode(&self) -> Option<PanelMode> {
        if self.combo.readonly {
            Some(PanelMode::Display)
        } else if self.always_show_edit_panel {
            Some(PanelMode::Editing)
        } else {
            None
        }
    }
}

/// Tag panel component
pub struct TagPanel<T, K> {
    id: ComponentId,
    context: Context,
    props: TagPanelProps<T, K>,
    mode: Arc<Mutex<PanelMode>>,
    combo: ComboBox<T, K>,
    guard: Option<ListenerGuard>,
}

impl<T, K> fmt::Debug for TagPanel<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagPanel")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("combo", &self.combo)
            .finish()
    }
}

impl<T, K> TagPanel<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    pub fn new(props: TagPanelProps<T, K>, context: Context) -> Self {
        let id = ComponentId::new();
        let combo = ComboBox::new(props.combo_props(), context.clone()).within(id);
        Self {
            id,
            context,
            props,
            mode: Arc::new(Mutex::new(PanelMode::Display)),
            combo,
            guard: None,
        }
    }

    /// Effective mode
    pub fn mode(&self) -> Result<PanelMode, ComponentError> {
        match self.props.pinned_mode() {
            Some(mode) => Ok(mode),
            None => Ok(*self.mode.lock()?),
        }
    }

    /// The inner combo box
    pub fn combo(&self) -> &ComboBox<T, K> {
        &self.combo
    }

    /// Switch to `Editing` and open the dropdown
    pub fn enter_editing(&self) -> Result<(), ComponentError> {
        if self.props.pinned_mode() == Some(PanelMode::Display) {
            return Ok(());
        }
        self.set_mode(PanelMode::Editing)?;
        self.combo.open()
    }

    /// Switch to `Display` and close the dropdown
    pub fn exit_editing(&self) -> Result<(), ComponentError> {
        self.set_mode(PanelMode::Display)?;
        self.combo.close()
    }

    fn set_mode(&self, mode: PanelMode) -> Result<(), ComponentError> {
        let mut current = self.mode.lock()?;
        if *current != mode {
            log::debug!("tag panel {}: {:?} -> {:?}", self.id, *current, mode);
            *current = mode;
        }
        Ok(())
    }

    fn node(&self, tag: &'static str, key: impl Into<String>) -> Node {
        let id = NodeId::new(self.id, key);
        let data_node = id.to_string();
        Node::new(tag, id).with_attr("data-node", data_node)
    }

    fn render_display(&self) -> Node {
        let combo = &self.props.combo;
        let panel = self
            .node("div", "panel")
            .with_attr("class", "tag-panel")
            .with_attr("data-mode", "display")
            .with_flag("data-readonly", combo.readonly);

        if combo.selected_items.is_empty() {
            return panel.with_child(
                self.node("span", "placeholder")
                    .with_attr("class", "tag-panel-placeholder")
                    .with_text(combo.placeholder.clone()),
            );
        }

        let tags = combo.selected_items.iter().enumerate().map(|(i, item)| {
            let tag = self
                .node("span", format!("tag:{i}"))
                .with_attr("class", "tag-panel-tag")
                .with_text(combo.accessors.label(item));
            match combo.accessors.colour(item) {
                Some(colour) => tag.with_attr("data-colour", colour),
                None => tag,
            }
        });
        panel.with_children(tags)
    }

    fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        editing: bool,
    ) -> Result<(), ComponentError> {
        match &event.target {
            Some(target) if target.owner == self.combo.id() => {
                if editing {
                    self.combo.handle_event(&UiEvent::Pointer(event.clone()))
                } else {
                    Err(ComponentError::UnknownTarget(target.to_string()))
                }
            }
            Some(target) if target.owner == self.id => {
                if event.is_activation() && !editing {
                    self.enter_editing()?;
                }
                Ok(())
            }
            Some(target) => Err(ComponentError::UnknownTarget(target.to_string())),
            None => Err(ComponentError::UnknownTarget("<none>".to_string())),
        }
    }

    fn handle_key(&mut self, event: &KeyboardEvent, editing: bool) -> Result<(), ComponentError> {
        if !editing {
            return Ok(());
        }
        self.combo.handle_event(&UiEvent::Keyboard(event.clone()))?;
        if event.kind == KeyKind::Up && matches!(event.key, Key::Enter | Key::Tab) {
            self.exit_editing()?;
        }
        Ok(())
    }
}

impl<T, K> Component for TagPanel<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    type Props = TagPanelProps<T, K>;

    fn create(props: Self::Props, context: Context) -> Self {
        Self::new(props, context)
    }

    fn id(&self) -> ComponentId {
        self.id
    }

    fn mount(&mut self) -> Result<(), ComponentError> {
        self.combo.mount()?;

        let mode = Arc::clone(&self.mode);
        let boundary = Boundary::new(self.id).with(self.combo.id());
        let registered = self
            .context
            .document()
            .on_click_away(boundary, move |_| match mode.lock() {
                Ok(mut mode) => *mode = PanelMode::Display,
                Err(e) => log::warn!("click-away could not leave edit mode: {e}"),
            });
        match registered {
            Ok(guard) => {
                self.guard = Some(guard);
                Ok(())
            }
            Err(e) => {
                // Leave nothing registered behind a failed mount
                self.combo.unmount()?;
                Err(e.into())
            }
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.combo.update(props.combo_props())?;
        self.props = props;
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), ComponentError> {
        self.guard = None;
        *self.mode.lock()? = PanelMode::Display;
        self.combo.unmount()
    }

    fn handle_event(&mut self, event: &UiEvent) -> Result<(), ComponentError> {
        let editing = self.mode()? == PanelMode::Editing;
        match event {
            UiEvent::Pointer(pointer) => self.handle_pointer(pointer, editing),
            UiEvent::Keyboard(key) => self.handle_key(key, editing),
            UiEvent::Input(_) | UiEvent::Focus(_) if editing => self.combo.handle_event(event),
            UiEvent::Input(_) => Ok(()),
            UiEvent::Focus(FocusEvent::Focus) => self.enter_editing(),
            UiEvent::Focus(FocusEvent::Blur) => Ok(()),
        }
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        if self.props.combo.hidden {
            return Ok(Vec::new());
        }
        match self.mode()? {
            PanelMode::Display => Ok(vec![self.render_display()]),
            PanelMode::Editing => {
                let panel = self
                    .node("div", "panel")
                    .with_attr("class", "tag-panel")
                    .with_attr("data-mode", "editing")
                    .with_children(self.combo.render()?);
                Ok(vec![panel])
            }
        }
    }
}
