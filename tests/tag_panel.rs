// Tag panel mode transitions and edit flow

use std::sync::{Arc, Mutex};

use combokit::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Tag {
    slug: &'static str,
    colour: &'static str,
}

fn tags() -> Vec<Tag> {
    vec![
        Tag { slug: "bug", colour: "#d73a4a" },
        Tag { slug: "docs", colour: "#0075ca" },
        Tag { slug: "feature", colour: "#a2eeef" },
    ]
}

fn accessors() -> Accessors<Tag, &'static str> {
    Accessors::new(|t: &Tag| t.slug.to_string(), |t: &Tag| t.slug)
        .with_colour(|t: &Tag| t.colour.to_string())
}

type Panel = LifecycleManager<TagPanel<Tag, &'static str>>;

fn mount(props: TagPanelProps<Tag, &'static str>, context: &Context) -> Panel {
    let mut manager = LifecycleManager::create(props, context.clone());
    manager.mount().unwrap();
    manager
}

fn panel_node(manager: &Panel, key: &str) -> NodeId {
    NodeId::new(manager.component().id(), key)
}

#[test]
fn test_display_shows_coloured_chips() {
    let props = TagPanelProps::new(tags(), tags()[..2].to_vec(), accessors());
    let manager = mount(props, &Context::new());
    assert_eq!(manager.component().mode().unwrap(), PanelMode::Display);

    let nodes = manager.render().unwrap();
    let chip = nodes[0].find_by_key("tag:1").unwrap();
    assert_eq!(chip.text(), Some("docs"));
    assert_eq!(chip.attribute("data-colour"), Some("#0075ca"));
    assert!(nodes[0].find_by_key("input").is_none());
}

#[test]
fn test_click_enters_editing_and_opens_dropdown() {
    let mut manager = mount(TagPanelProps::new(tags(), vec![], accessors()), &Context::new());
    let chip_area = panel_node(&manager, "placeholder");
    manager.dispatch(&PointerEvent::click(chip_area).into()).unwrap();

    assert_eq!(manager.component().mode().unwrap(), PanelMode::Editing);
    let nodes = manager.render().unwrap();
    assert_eq!(nodes[0].attribute("data-mode"), Some("editing"));

    let combo = nodes[0].find_by_key("container").unwrap();
    assert!(combo.has_attribute("data-multi"));
    assert!(combo.has_attribute("data-open"));
}

#[test]
fn test_edit_flow_adds_tag_and_enter_exits() {
    let added = Arc::new(Mutex::new(Vec::new()));
    let added_clone = added.clone();
    let props = TagPanelProps::new(tags(), vec![tags()[0].clone()], accessors())
        .with_combo(move |combo| {
            combo.on_add(move |t: Tag| added_clone.lock().unwrap().push(t.slug))
        });
    let mut manager = mount(props, &Context::new());

    manager.dispatch(&FocusEvent::Focus.into()).unwrap();
    manager.dispatch(&InputEvent::new("fe").into()).unwrap();
    manager.dispatch(&KeyboardEvent::down(Key::Enter).into()).unwrap();
    assert_eq!(*added.lock().unwrap(), vec!["feature"]);
    assert_eq!(manager.component().mode().unwrap(), PanelMode::Editing);

    manager.dispatch(&KeyboardEvent::up(Key::Enter).into()).unwrap();
    assert_eq!(manager.component().mode().unwrap(), PanelMode::Display);
    assert!(!manager.component().combo().state().unwrap().open);
}

#[test]
fn test_inner_clicks_do_not_leave_editing() {
    let context = Context::new();
    let mut manager = mount(TagPanelProps::new(tags(), vec![], accessors()), &context);
    manager.component().enter_editing().unwrap();

    let combo_id = manager.component().combo().id();
    let item = Part::Item(0).id(combo_id);
    context.document().dispatch(&PointerEvent::down(item.clone())).unwrap();
    manager.dispatch(&PointerEvent::click(item).into()).unwrap();

    assert_eq!(manager.component().mode().unwrap(), PanelMode::Editing);
    // Multi-select keeps the dropdown open after a pick
    assert!(manager.component().combo().state().unwrap().open);
}

#[test]
fn test_press_on_panel_wrapper_keeps_dropdown_open() {
    let context = Context::new();
    let manager = mount(TagPanelProps::new(tags(), vec![], accessors()), &context);
    manager.component().enter_editing().unwrap();

    let wrapper = panel_node(&manager, "panel");
    context.document().dispatch(&PointerEvent::down(wrapper)).unwrap();
    assert_eq!(manager.component().mode().unwrap(), PanelMode::Editing);
    assert!(manager.component().combo().state().unwrap().open);
}

#[test]
fn test_click_away_returns_to_display() {
    let context = Context::new();
    let manager = mount(TagPanelProps::new(tags(), vec![], accessors()), &context);
    manager.component().enter_editing().unwrap();

    context.document().dispatch(&PointerEvent::down_outside()).unwrap();
    assert_eq!(manager.component().mode().unwrap(), PanelMode::Display);
    assert!(!manager.component().combo().state().unwrap().open);
}

#[test]
fn test_always_show_edit_panel_pins_editing() {
    let context = Context::new();
    let mut manager = mount(
        TagPanelProps::new(tags(), vec![], accessors()).always_show_edit_panel(true),
        &context,
    );
    assert_eq!(manager.component().mode().unwrap(), PanelMode::Editing);

    manager.dispatch(&KeyboardEvent::up(Key::Tab).into()).unwrap();
    context.document().dispatch(&PointerEvent::down_outside()).unwrap();
    assert_eq!(manager.component().mode().unwrap(), PanelMode::Editing);
}

#[test]
fn test_unmount_releases_both_listeners() {
    let context = Context::new();
    let mut manager = mount(TagPanelProps::new(tags(), vec![], accessors()), &context);
    assert_eq!(context.document().listener_count(), 2);

    manager.unmount().unwrap();
    assert_eq!(context.document().listener_count(), 0);
}
