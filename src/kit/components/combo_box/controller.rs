//! Selection controller
//!
//! The controller is a reducer: `(state, props, action) -> (state, effects)`.
//! It owns only the ephemeral interaction state (open flag, filter text,
//! keyboard highlight). The selection itself comes in through the props on
//! every call and leaves as [`Effect`]s for the caller to apply.

use std::hash::Hash;

use super::{Candidate, ComboBoxProps};

/// Interaction state owned by a combo box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboBoxState {
    /// Whether the dropdown is open
    pub open: bool,
    /// Current filter text
    pub text: String,
    /// Index into the candidate list of the keyboard highlight
    pub highlighted: Option<usize>,
}

impl ComboBoxState {
    /// The closed state: dropdown shut, filter text and highlight cleared
    pub fn closed(&self) -> Self {
        Self::default()
    }
}

/// User intents the controller understands
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    Open,
    Close,
    /// Container click: open, or collapse an already-expanded list
    Toggle,
    SetText(String),
    Select(Candidate<T>),
    Remove(T),
    Clear,
    /// Backspace on an empty filter: drop the last chip (multi-select)
    RemoveLast,
    HighlightNext,
    HighlightPrevious,
    /// Select the highlighted candidate
    Confirm,
}

impl<T> Action<T> {
    fn name(&self) -> &'static str {
        match self {
            Action::Open => "open",
            Action::Close => "close",
            Action::Toggle => "toggle",
            Action::SetText(_) => "set_text",
            Action::Select(_) => "select",
            Action::Remove(_) => "remove",
            Action::Clear => "clear",
            Action::RemoveLast => "remove_last",
            Action::HighlightNext => "highlight_next",
            Action::HighlightPrevious => "highlight_previous",
            Action::Confirm => "confirm",
        }
    }
}

/// Notifications for the caller, delivered in order
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    /// The selection should become this list
    Change(Vec<T>),
    /// An item was added (multi-select)
    Add(T),
    /// An item was removed (multi-select)
    Remove(T),
    /// The create entry was chosen for this text
    Create(String),
    /// The user edited the filter text
    Search(String),
}

/// Result of reducing one action
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T> {
    pub state: ComboBoxState,
    pub effects: Vec<Effect<T>>,
}

impl<T> Transition<T> {
    fn unchanged(state: &ComboBoxState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    fn to(state: ComboBoxState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with_effects(state: ComboBoxState, effects: Vec<Effect<T>>) -> Self {
        Self { state, effects }
    }
}

/// Apply `action` to `state`.
///
/// Pure: the same inputs always produce the same transition. With
/// `props.readonly` set every action except `Close` leaves the state alone
/// and produces no effects.
pub fn reduce<T, K>(
    state: &ComboBoxState,
    props: &ComboBoxProps<T, K>,
    action: Action<T>,
) -> Transition<T>
where
    T: Clone,
    K: Eq + Hash,
{
    if props.readonly && !matches!(action, Action::Close) {
        log::debug!("ignoring {} on readonly combo box", action.name());
        return Transition::unchanged(state);
    }

    match action {
        Action::Open => open(state),
        Action::Close => Transition::to(state.closed()),
        Action::Toggle => {
            if !state.open {
                open(state)
            } else if props.candidates(&state.text).len() > 1 {
                Transition::to(state.closed())
            } else {
                Transition::unchanged(state)
            }
        }
        Action::SetText(text) => set_text(state, props, text),
        Action::Select(candidate) => select(state, props, candidate),
        Action::Remove(item) => remove(state, props, item),
        Action::Clear => {
            if !props.clearable || props.selected_items.is_empty() {
                return Transition::unchanged(state);
            }
            let next = ComboBoxState {
                text: String::new(),
                highlighted: None,
                ..state.clone()
            };
            Transition::with_effects(next, vec![Effect::Change(Vec::new())])
        }
        Action::RemoveLast => match props.selected_items.last() {
            Some(last) if state.text.is_empty() => remove(state, props, last.clone()),
            _ => Transition::unchanged(state),
        },
        Action::HighlightNext => highlight(state, props, 1),
        Action::HighlightPrevious => highlight(state, props, -1),
        Action::Confirm => {
            if !state.open {
                return open(state);
            }
            let candidates = props.candidates(&state.text);
            let index = match state.highlighted {
                Some(index) => Some(index),
                None if !state.text.is_empty() => first_pick(&candidates),
                None => None,
            };
            match index.and_then(|i| candidates.into_iter().nth(i)) {
                Some(candidate) => select(state, props, candidate),
                None => Transition::unchanged(state),
            }
        }
    }
}

fn open<T>(state: &ComboBoxState) -> Transition<T> {
    if state.open {
        return Transition::unchanged(state);
    }
    Transition::to(ComboBoxState {
        open: true,
        highlighted: None,
        ..state.clone()
    })
}

/// Candidate a typed filter points at: the first real item, or the create
/// entry when nothing else survives
fn first_pick<T>(candidates: &[Candidate<T>]) -> Option<usize> {
    let first_item = candidates.iter().position(|c| !c.is_create());
    first_item.or_else(|| (!candidates.is_empty()).then_some(0))
}

fn set_text<T, K>(
    state: &ComboBoxState,
    props: &ComboBoxProps<T, K>,
    text: String,
) -> Transition<T>
where
    T: Clone,
    K: Eq + Hash,
{
    if text == state.text {
        return Transition::unchanged(state);
    }
    let highlighted = if text.is_empty() {
        None
    } else {
        first_pick(&props.candidates(&text))
    };
    let next = ComboBoxState {
        open: state.open,
        text: text.clone(),
        highlighted,
    };
    Transition::with_effects(next, vec![Effect::Search(text)])
}

fn select<T, K>(
    state: &ComboBoxState,
    props: &ComboBoxProps<T, K>,
    candidate: Candidate<T>,
) -> Transition<T>
where
    T: Clone,
    K: Eq + Hash,
{
    // Single-select closes after a pick; multi-select stays open for more
    let after_pick = ComboBoxState {
        open: props.multi_select && state.open,
        text: String::new(),
        highlighted: None,
    };

    match candidate {
        Candidate::Create { text, .. } => {
            Transition::with_effects(after_pick, vec![Effect::Create(text)])
        }
        Candidate::Item(item) if props.multi_select => {
            if props.accessors.contains(&props.selected_items, &item) {
                log::warn!(
                    "ignoring selection of already-selected item {:?}",
                    props.accessors.label(&item)
                );
                return Transition::unchanged(state);
            }
            let mut selection = props.selected_items.clone();
            selection.push(item.clone());
            let effects = vec![Effect::Add(item), Effect::Change(selection)];
            Transition::with_effects(after_pick, effects)
        }
        Candidate::Item(item) => {
            Transition::with_effects(after_pick, vec![Effect::Change(vec![item])])
        }
    }
}

fn remove<T, K>(state: &ComboBoxState, props: &ComboBoxProps<T, K>, item: T) -> Transition<T>
where
    T: Clone,
    K: Eq + Hash,
{
    if !props.multi_select || !props.accessors.contains(&props.selected_items, &item) {
        return Transition::unchanged(state);
    }
    let key = props.accessors.value(&item);
    let selection: Vec<T> = props
        .selected_items
        .iter()
        .filter(|other| props.accessors.value(other) != key)
        .cloned()
        .collect();
    let next = ComboBoxState {
        highlighted: None,
        ..state.clone()
    };
    Transition::with_effects(next, vec![Effect::Remove(item), Effect::Change(selection)])
}

fn highlight<T, K>(
    state: &ComboBoxState,
    props: &ComboBoxProps<T, K>,
    step: isize,
) -> Transition<T>
where
    T: Clone,
    K: Eq + Hash,
{
    let count = props.candidates(&state.text).len();
    let highlighted = if count == 0 {
        None
    } else {
        let count = count as isize;
        let next = match state.highlighted {
            Some(current) if state.open => (current as isize + step).rem_euclid(count),
            _ if step > 0 => 0,
            _ => count - 1,
        };
        Some(next as usize)
    };
    Transition::to(ComboBoxState {
        open: true,
        highlighted,
        ..state.clone()
    })
}

/// Stateful wrapper around [`reduce`]
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: ComboBoxState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ComboBoxState {
        &self.state
    }

    /// Reduce `action` into the held state and return the effects
    pub fn apply<T, K>(
        &mut self,
        props: &ComboBoxProps<T, K>,
        action: Action<T>,
    ) -> Vec<Effect<T>>
    where
        T: Clone,
        K: Eq + Hash,
    {
        let name = action.name();
        let transition = reduce(&self.state, props, action);
        if transition.state != self.state || !transition.effects.is_empty() {
            log::trace!(
                "{name}: open={} text={:?} highlighted={:?} effects={}",
                transition.state.open,
                transition.state.text,
                transition.state.highlighted,
                transition.effects.len()
            );
        }
        self.state = transition.state;
        transition.effects
    }

    /// Close without consulting props, as click-away does
    pub fn dismiss(&mut self) {
        if self.state != ComboBoxState::default() {
            log::trace!("dismissed");
        }
        self.state = self.state.closed();
    }

    /// Drop a highlight that no longer points into the candidate list
    pub fn sync<T, K>(&mut self, props: &ComboBoxProps<T, K>)
    where
        T: Clone,
        K: Eq + Hash,
    {
        if let Some(index) = self.state.highlighted {
            if index >= props.candidates(&self.state.text).len() {
                self.state.highlighted = None;
            }
        }
    }

    pub fn candidates<T, K>(&self, props: &ComboBoxProps<T, K>) -> Vec<Candidate<T>>
    where
        T: Clone,
        K: Eq + Hash,
    {
        props.candidates(&self.state.text)
    }

    pub fn open<T: Clone, K: Eq + Hash>(
        &mut self,
        props: &ComboBoxProps<T, K>,
    ) -> Vec<Effect<T>> {
        self.apply(props, Action::Open)
    }

    pub fn close<T: Clone, K: Eq + Hash>(
        &mut self,
        props: &ComboBoxProps<T, K>,
    ) -> Vec<Effect<T>> {
        self.apply(props, Action::Close)
    }

    pub fn toggle_open<T: Clone, K: Eq + Hash>(
        &mut self,
        props: &ComboBoxProps<T, K>,
    ) -> Vec<Effect<T>> {
        self.apply(props, Action::Toggle)
    }

    pub fn set_filter_text<T: Clone, K: Eq + Hash>(
        &mut self,
        props: &ComboBoxProps<T, K>,
        text: impl Into<String>,
    ) -> Vec<Effect<T>> {
        self.apply(props, Action::SetText(text.into()))
    }

    pub fn select<T: Clone, K: Eq + Hash>(
        &mut self,
        props: &ComboBoxProps<T, K>,
        candidate: Candidate<T>,
    ) -> Vec<Effect<T>> {
        self.apply(props, Action::Select(candidate))
    }

    pub fn remove<T: Clone, K: Eq + Hash>(
        &mut self,
        props: &ComboBoxProps<T, K>,
        item: T,
    ) -> Vec<Effect<T>> {
        self.apply(props, Action::Remove(item))
    }

    pub fn clear<T: Clone, K: Eq + Hash>(
        &mut self,
        props: &ComboBoxProps<T, K>,
    ) -> Vec<Effect<T>> {
        self.apply(props, Action::Clear)
    }
}
