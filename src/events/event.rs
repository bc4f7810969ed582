//! Event payloads delivered to components

use crate::component::NodeId;

/// Types of pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse button or pen pressed
    Down,
    /// Press and release on the same target
    Click,
    /// Finger placed on the surface
    TouchStart,
}

/// Pointer or touch event with the node it was aimed at
///
/// A `target` of `None` means the event landed on something no component
/// rendered, such as the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened
    pub kind: PointerKind,
    /// Node under the pointer
    pub target: Option<NodeId>,
}

impl PointerEvent {
    /// Create a pointer event
    pub fn new(kind: PointerKind, target: Option<NodeId>) -> Self {
        Self { kind, target }
    }

    /// A click on the given node
    pub fn click(target: NodeId) -> Self {
        Self::new(PointerKind::Click, Some(target))
    }

    /// A pointer press on the given node
    pub fn down(target: NodeId) -> Self {
        Self::new(PointerKind::Down, Some(target))
    }

    /// A touch start on the given node
    pub fn touch_start(target: NodeId) -> Self {
        Self::new(PointerKind::TouchStart, Some(target))
    }

    /// A pointer press that landed outside every rendered node
    pub fn down_outside() -> Self {
        Self::new(PointerKind::Down, None)
    }

    /// Whether this is the start of a press (pointer down or touch start)
    pub fn is_press(&self) -> bool {
        matches!(self.kind, PointerKind::Down | PointerKind::TouchStart)
    }

    /// Whether this event activates the target (click or touch start)
    pub fn is_activation(&self) -> bool {
        matches!(self.kind, PointerKind::Click | PointerKind::TouchStart)
    }
}

/// Logical keys the components react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    Backspace,
    /// A printable character
    Character(char),
    /// Anything else, by its DOM key name
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a logical key
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Backspace" => Key::Backspace,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }
}

/// Keyboard event phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Key down
    Down,
    /// Key up
    Up,
}

/// Keyboard event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Key down or key up
    pub kind: KeyKind,
    /// The key involved
    pub key: Key,
}

impl KeyboardEvent {
    /// Key down event
    pub fn down(key: Key) -> Self {
        Self {
            kind: KeyKind::Down,
            key,
        }
    }

    /// Key up event
    pub fn up(key: Key) -> Self {
        Self {
            kind: KeyKind::Up,
            key,
        }
    }
}

/// The text field's value changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// New value of the field
    pub value: String,
}

impl InputEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Focus event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// Focus
    Focus,
    /// Blur
    Blur,
}

/// Any event a component can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Pointer(PointerEvent),
    Keyboard(KeyboardEvent),
    Input(InputEvent),
    Focus(FocusEvent),
}

impl From<PointerEvent> for UiEvent {
    fn from(event: PointerEvent) -> Self {
        UiEvent::Pointer(event)
    }
}

impl From<KeyboardEvent> for UiEvent {
    fn from(event: KeyboardEvent) -> Self {
        UiEvent::Keyboard(event)
    }
}

impl From<InputEvent> for UiEvent {
    fn from(event: InputEvent) -> Self {
        UiEvent::Input(event)
    }
}

impl From<FocusEvent> for UiEvent {
    fn from(event: FocusEvent) -> Self {
        UiEvent::Focus(event)
    }
}
