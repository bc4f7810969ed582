//! Event wiring tests for the ComboBox component

use std::sync::{Arc, Mutex};

use super::*;
use crate::component::{Component, LifecycleManager, NodeId};
use crate::events::{InputEvent, PointerKind};

#[derive(Debug, Clone, PartialEq)]
struct Fruit {
    id: u32,
    name: &'static str,
}

fn fruits() -> Vec<Fruit> {
    vec![
        Fruit { id: 1, name: "Apple" },
        Fruit { id: 2, name: "Banana" },
        Fruit { id: 3, name: "Cherry" },
    ]
}

fn accessors() -> Accessors<Fruit, u32> {
    Accessors::new(|f: &Fruit| f.name.to_string(), |f: &Fruit| f.id)
}

/// Records every callback invocation as a string
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn wire(&self, props: ComboBoxProps<Fruit, u32>) -> ComboBoxProps<Fruit, u32> {
        let change = self.0.clone();
        let add = self.0.clone();
        let remove = self.0.clone();
        let create = self.0.clone();
        let search = self.0.clone();
        props
            .on_change(move |items| {
                let names: Vec<_> = items.iter().map(|f| f.name).collect();
                change.lock().unwrap().push(format!("change:{}", names.join(",")));
            })
            .on_add(move |item| add.lock().unwrap().push(format!("add:{}", item.name)))
            .on_remove(move |item| remove.lock().unwrap().push(format!("remove:{}", item.name)))
            .on_create(move |text| create.lock().unwrap().push(format!("create:{text}")))
            .on_search(move |text| search.lock().unwrap().push(format!("search:{text}")))
    }

    fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

fn fresh_props() -> ComboBoxProps<Fruit, u32> {
    ComboBoxProps::new(fruits(), vec![], accessors())
}

fn mounted(props: ComboBoxProps<Fruit, u32>) -> LifecycleManager<ComboBox<Fruit, u32>> {
    let mut manager = LifecycleManager::create(props, Context::new());
    manager.mount().unwrap();
    manager
}

fn click(manager: &mut LifecycleManager<ComboBox<Fruit, u32>>, part: Part) {
    let id = part.id(manager.component().id());
    manager.dispatch(&PointerEvent::click(id).into()).unwrap();
}

#[test]
fn test_container_click_toggles() {
    let mut manager = mounted(ComboBoxProps::new(fruits(), vec![], accessors()));
    click(&mut manager, Part::Container);
    assert!(manager.component().state().unwrap().open);

    click(&mut manager, Part::Input);
    assert!(!manager.component().state().unwrap().open);
}

#[test]
fn test_item_click_selects_without_toggling() {
    let recorder = Recorder::default();
    let mut manager = mounted(recorder.wire(ComboBoxProps::new(fruits(), vec![], accessors())));
    click(&mut manager, Part::Container);
    click(&mut manager, Part::Item(1));

    assert_eq!(recorder.calls(), vec!["change:Banana"]);
    assert!(!manager.component().state().unwrap().open);
}

#[test]
fn test_chip_remove_click() {
    let recorder = Recorder::default();
    let props = recorder
        .wire(ComboBoxProps::new(fruits(), fruits(), accessors()))
        .multi_select(true);
    let mut manager = mounted(props);
    click(&mut manager, Part::ChipRemove(0));

    assert_eq!(recorder.calls(), vec!["remove:Apple", "change:Banana,Cherry"]);
    assert!(!manager.component().state().unwrap().open);
}

#[test]
fn test_typing_opens_filters_and_searches() {
    let recorder = Recorder::default();
    let mut manager = mounted(recorder.wire(ComboBoxProps::new(fruits(), vec![], accessors())));
    manager.dispatch(&InputEvent::new("ch").into()).unwrap();

    let state = manager.component().state().unwrap();
    assert!(state.open);
    assert_eq!(state.text, "ch");
    assert_eq!(state.highlighted, Some(0));
    assert_eq!(recorder.calls(), vec!["search:ch"]);

    manager
        .dispatch(&KeyboardEvent::down(Key::Enter).into())
        .unwrap();
    assert_eq!(recorder.calls(), vec!["search:ch", "change:Cherry"]);
}

#[test]
fn test_arrow_keys_move_highlight() {
    let mut manager = mounted(ComboBoxProps::new(fruits(), vec![], accessors()));
    manager
        .dispatch(&KeyboardEvent::down(Key::ArrowDown).into())
        .unwrap();
    manager
        .dispatch(&KeyboardEvent::down(Key::ArrowDown).into())
        .unwrap();
    assert_eq!(manager.component().state().unwrap().highlighted, Some(1));

    manager
        .dispatch(&KeyboardEvent::down(Key::ArrowUp).into())
        .unwrap();
    manager
        .dispatch(&KeyboardEvent::down(Key::ArrowUp).into())
        .unwrap();
    assert_eq!(manager.component().state().unwrap().highlighted, Some(2));
}

#[test]
fn test_escape_keyup_closes() {
    let mut manager = mounted(ComboBoxProps::new(fruits(), vec![], accessors()));
    manager.dispatch(&InputEvent::new("xyz").into()).unwrap();

    // Keydown is not enough
    manager
        .dispatch(&KeyboardEvent::down(Key::Escape).into())
        .unwrap();
    assert!(manager.component().state().unwrap().open);

    manager
        .dispatch(&KeyboardEvent::up(Key::Escape).into())
        .unwrap();
    assert_eq!(manager.component().state().unwrap(), ComboBoxState::default());
}

#[test]
fn test_focus_opens() {
    let mut manager = mounted(ComboBoxProps::new(fruits(), vec![], accessors()));
    manager.dispatch(&FocusEvent::Focus.into()).unwrap();
    assert!(manager.component().state().unwrap().open);
    manager.dispatch(&FocusEvent::Blur.into()).unwrap();
    assert!(manager.component().state().unwrap().open);
}

#[test]
fn test_foreign_target_is_rejected() {
    let mut manager = mounted(ComboBoxProps::new(fruits(), vec![], accessors()));
    let stranger = NodeId::new(ComponentId::new(), "container");
    let result = manager.dispatch(&PointerEvent::click(stranger).into());
    assert!(matches!(result, Err(ComponentError::UnknownTarget(_))));

    // Item parts only exist while the list is open
    let own = Part::Item(0).id(manager.component().id());
    let result = manager.dispatch(&PointerEvent::click(own).into());
    assert!(matches!(result, Err(ComponentError::UnknownTarget(_))));
}

#[test]
fn test_pointer_down_does_not_activate() {
    let mut manager = mounted(ComboBoxProps::new(fruits(), vec![], accessors()));
    let id = Part::Container.id(manager.component().id());
    manager
        .dispatch(&PointerEvent::new(PointerKind::Down, Some(id)).into())
        .unwrap();
    assert!(!manager.component().state().unwrap().open);
}

#[test]
fn test_click_away_closes() {
    let context = Context::new();
    let mut manager: LifecycleManager<ComboBox<Fruit, u32>> =
        LifecycleManager::create(fresh_props(), context.clone());
    manager.mount().unwrap();
    manager.component().open().unwrap();
    manager.component().set_filter_text("Ba").unwrap();

    // Presses inside leave it open
    let inside = Part::Input.id(manager.component().id());
    context.document().dispatch(&PointerEvent::down(inside)).unwrap();
    assert!(manager.component().state().unwrap().open);

    context.document().dispatch(&PointerEvent::down_outside()).unwrap();
    assert_eq!(manager.component().state().unwrap(), ComboBoxState::default());
}

#[test]
fn test_update_clamps_highlight() {
    let mut manager = mounted(ComboBoxProps::new(fruits(), vec![], accessors()));
    manager
        .dispatch(&KeyboardEvent::down(Key::ArrowUp).into())
        .unwrap();
    assert_eq!(manager.component().state().unwrap().highlighted, Some(2));

    manager
        .update(ComboBoxProps::new(fruits()[..1].to_vec(), vec![], accessors()))
        .unwrap();
    assert_eq!(manager.component().state().unwrap().highlighted, None);
}

#[test]
fn test_mount_unmount_balances_listeners() {
    let context = Context::new();
    let mut manager: LifecycleManager<ComboBox<Fruit, u32>> =
        LifecycleManager::create(fresh_props(), context.clone());
    assert_eq!(context.document().listener_count(), 0);

    manager.mount().unwrap();
    assert!(manager.component().is_listening());
    assert_eq!(context.document().listener_count(), 1);

    manager.unmount().unwrap();
    assert!(!manager.component().is_listening());
    assert_eq!(context.document().listener_count(), 0);
}

#[test]
fn test_backspace_removes_last_chip_only_on_empty_text() {
    let recorder = Recorder::default();
    let props = recorder
        .wire(ComboBoxProps::new(fruits(), fruits()[..2].to_vec(), accessors()))
        .multi_select(true);
    let mut manager = mounted(props);

    manager.dispatch(&InputEvent::new("c").into()).unwrap();
    manager.dispatch(&KeyboardEvent::down(Key::Backspace).into()).unwrap();
    assert_eq!(recorder.calls(), vec!["search:c"]);

    manager.dispatch(&InputEvent::new("").into()).unwrap();
    manager.dispatch(&KeyboardEvent::down(Key::Backspace).into()).unwrap();
    assert_eq!(recorder.calls(), vec!["search:c", "search:", "remove:Banana", "change:Apple"]);
}

#[test]
fn test_second_mount_keeps_single_listener() {
    let context = Context::new();
    let mut combo = ComboBox::new(fresh_props(), context.clone());
    combo.mount().unwrap();

    let again = combo.mount();
    assert!(matches!(again, Err(ComponentError::MountError(_))));
    assert_eq!(context.document().listener_count(), 1);
}

#[test]
fn test_within_extends_click_away_boundary() {
    let context = Context::new();
    let wrapper = ComponentId::new();
    let mut combo = ComboBox::new(fresh_props(), context.clone()).within(wrapper);
    combo.mount().unwrap();
    combo.open().unwrap();

    context.document().dispatch(&PointerEvent::down(NodeId::new(wrapper, "panel"))).unwrap();
    assert!(combo.state().unwrap().open);

    let stranger = NodeId::new(ComponentId::new(), "panel");
    context.document().dispatch(&PointerEvent::down(stranger)).unwrap();
    assert!(!combo.state().unwrap().open);
}
