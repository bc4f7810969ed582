//! Rendering surface: container, chips, input, list and items

use std::hash::Hash;

use super::{Candidate, ComboBoxProps, ComboBoxState};
use crate::component::{ComponentId, Node, NodeId};

/// Addressable parts of a rendered combo box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Container,
    Chips,
    Chip(usize),
    ChipRemove(usize),
    /// Static text of the single selected item
    Selected,
    Input,
    Clear,
    List,
    Item(usize),
    NoResults,
}

impl Part {
    /// Node key of this part
    pub fn key(&self) -> String {
        match self {
            Part::Container => "container".to_string(),
            Part::Chips => "chips".to_string(),
            Part::Chip(i) => format!("chip:{i}"),
            Part::ChipRemove(i) => format!("chip-remove:{i}"),
            Part::Selected => "selected".to_string(),
            Part::Input => "input".to_string(),
            Part::Clear => "clear".to_string(),
            Part::List => "list".to_string(),
            Part::Item(i) => format!("item:{i}"),
            Part::NoResults => "no-results".to_string(),
        }
    }

    /// Inverse of [`Part::key`]
    pub fn parse(key: &str) -> Option<Self> {
        let part = match key {
            "container" => Part::Container,
            "chips" => Part::Chips,
            "selected" => Part::Selected,
            "input" => Part::Input,
            "clear" => Part::Clear,
            "list" => Part::List,
            "no-results" => Part::NoResults,
            _ => {
                let (name, index) = key.split_once(':')?;
                let index = index.parse().ok()?;
                match name {
                    "chip" => Part::Chip(index),
                    "chip-remove" => Part::ChipRemove(index),
                    "item" => Part::Item(index),
                    _ => return None,
                }
            }
        };
        Some(part)
    }

    /// Node id of this part when rendered by `owner`
    pub fn id(&self, owner: ComponentId) -> NodeId {
        NodeId::new(owner, self.key())
    }
}

fn node(tag: &'static str, owner: ComponentId, part: Part) -> Node {
    let id = part.id(owner);
    let data_node = id.to_string();
    Node::new(tag, id).with_attr("data-node", data_node)
}

/// Render the combo box owned by `owner`.
///
/// Returns no nodes while `props.hidden` is set.
pub fn render_combo_box<T, K>(
    owner: ComponentId,
    state: &ComboBoxState,
    props: &ComboBoxProps<T, K>,
) -> Vec<Node>
where
    T: Clone,
    K: Eq + Hash,
{
    if props.hidden {
        return Vec::new();
    }

    let mut container = node("div", owner, Part::Container)
        .with_attr("class", "combo-box")
        .with_attr("role", "combobox")
        .with_attr("aria-expanded", state.open.to_string())
        .with_flag("data-open", state.open)
        .with_flag("data-multi", props.multi_select)
        .with_flag("data-readonly", props.readonly);

    if props.multi_select {
        if !props.selected_items.is_empty() {
            container = container.with_child(render_chips(owner, props));
        }
    }

    // Single-select shows the selection in place of the input until the
    // user types. The input stays in the tree so it can still take focus.
    let selected = match props.selected_items.first() {
        Some(item) if !props.multi_select && state.text.is_empty() => Some(item),
        _ => None,
    };
    if let Some(item) = selected {
        container = container.with_child(
            node("span", owner, Part::Selected)
                .with_attr("class", "combo-box-selected")
                .with_text(props.accessors.label(item)),
        );
    }

    let input = render_input(owner, state, props).with_flag("data-covered", selected.is_some());
    container = container.with_child(input);

    if props.can_clear() {
        container = container.with_child(
            node("button", owner, Part::Clear)
                .with_attr("class", "combo-box-clear")
                .with_attr("aria-label", "Clear selection"),
        );
    }

    if state.open {
        container = container.with_child(render_list(owner, state, props));
    }

    vec![container]
}

fn render_chips<T, K>(owner: ComponentId, props: &ComboBoxProps<T, K>) -> Node
where
    T: Clone,
    K: Eq + Hash,
{
    let chips = props.selected_items.iter().enumerate().map(|(i, item)| {
        let label = props.accessors.label(item);
        let mut chip = node("span", owner, Part::Chip(i))
            .with_attr("class", "combo-box-chip")
            .with_text(label.clone());
        if let Some(colour) = props.accessors.colour(item) {
            chip = chip.with_attr("data-colour", colour);
        }
        if !props.readonly {
            chip = chip.with_child(
                node("button", owner, Part::ChipRemove(i))
                    .with_attr("class", "combo-box-chip-remove")
                    .with_attr("aria-label", format!("Remove {label}")),
            );
        }
        chip
    });
    node("div", owner, Part::Chips)
        .with_attr("class", "combo-box-chips")
        .with_children(chips)
}

fn render_input<T, K>(
    owner: ComponentId,
    state: &ComboBoxState,
    props: &ComboBoxProps<T, K>,
) -> Node
where
    T: Clone,
    K: Eq + Hash,
{
    let placeholder = if props.readonly {
        ""
    } else if props.multi_select || props.selected_items.is_empty() {
        props.placeholder.as_str()
    } else {
        ""
    };

    node("input", owner, Part::Input)
        .with_attr("class", "combo-box-input")
        .with_attr("type", "text")
        .with_attr("value", state.text.clone())
        .with_attr("placeholder", placeholder)
        .with_flag("readonly", props.readonly)
}

fn render_list<T, K>(
    owner: ComponentId,
    state: &ComboBoxState,
    props: &ComboBoxProps<T, K>,
) -> Node
where
    T: Clone,
    K: Eq + Hash,
{
    let list = node("ul", owner, Part::List)
        .with_attr("class", "combo-box-list")
        .with_attr("role", "listbox");

    let candidates = props.candidates(&state.text);
    if candidates.is_empty() {
        if props.creatable {
            return list;
        }
        return list.with_child(
            node("li", owner, Part::NoResults)
                .with_attr("class", "combo-box-no-results")
                .with_text(props.no_results_text.clone()),
        );
    }

    let items = candidates.iter().enumerate().map(|(i, candidate)| {
        let highlighted = state.highlighted == Some(i);
        let mut item = node("li", owner, Part::Item(i))
            .with_attr("class", "combo-box-item")
            .with_attr("role", "option")
            .with_attr("aria-selected", highlighted.to_string())
            .with_flag("data-highlighted", highlighted)
            .with_text(candidate.label(&props.accessors));
        match candidate {
            Candidate::Create { .. } => item = item.with_flag("data-create", true),
            Candidate::Item(value) => {
                if let Some(colour) = props.accessors.colour(value) {
                    item = item.with_attr("data-colour", colour);
                }
            }
        }
        item
    });
    list.with_children(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::components::combo_box::Accessors;

    fn props(selected: &[&'static str]) -> ComboBoxProps<&'static str, &'static str> {
        ComboBoxProps::new(
            vec!["Apple", "Banana", "Cherry"],
            selected.to_vec(),
            Accessors::new(|s: &&'static str| s.to_string(), |s: &&'static str| *s),
        )
    }

    fn open() -> ComboBoxState {
        ComboBoxState {
            open: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_part_keys_round_trip() {
        for part in [
            Part::Container,
            Part::Chip(3),
            Part::ChipRemove(0),
            Part::Item(12),
            Part::NoResults,
        ] {
            assert_eq!(Part::parse(&part.key()), Some(part));
        }
        assert_eq!(Part::parse("item:x"), None);
        assert_eq!(Part::parse("unknown"), None);
    }

    #[test]
    fn test_closed_renders_no_list() {
        let owner = ComponentId::new();
        let nodes = render_combo_box(owner, &ComboBoxState::default(), &props(&[]));
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].find_by_key("list").is_none());
        assert_eq!(nodes[0].attribute("aria-expanded"), Some("false"));
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let nodes = render_combo_box(ComponentId::new(), &open(), &props(&[]).hidden(true));
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_single_selected_shows_static_text_until_typing() {
        let owner = ComponentId::new();
        let p = props(&["Banana"]);
        let nodes = render_combo_box(owner, &ComboBoxState::default(), &p);
        let selected = nodes[0].find_by_key("selected").unwrap();
        assert_eq!(selected.text(), Some("Banana"));
        let input = nodes[0].find_by_key("input").unwrap();
        assert_eq!(input.attribute("placeholder"), Some(""));
        assert!(input.has_attribute("data-covered"));

        let typing = ComboBoxState {
            text: "Ch".to_string(),
            ..open()
        };
        let nodes = render_combo_box(owner, &typing, &p);
        assert!(nodes[0].find_by_key("selected").is_none());
        assert!(!nodes[0].find_by_key("input").unwrap().has_attribute("data-covered"));

        let empty = render_combo_box(owner, &ComboBoxState::default(), &props(&[]));
        assert!(!empty[0].find_by_key("input").unwrap().has_attribute("data-covered"));
    }

    #[test]
    fn test_multi_select_keeps_placeholder_and_renders_chips() {
        let owner = ComponentId::new();
        let p = props(&["Apple", "Cherry"]).multi_select(true);
        let nodes = render_combo_box(owner, &open(), &p);
        let root = &nodes[0];

        let input = root.find_by_key("input").unwrap();
        assert_eq!(input.attribute("placeholder"), Some("Select..."));
        assert_eq!(root.find_by_key("chips").unwrap().children().len(), 2);
        assert!(root.find_by_key("chip-remove:1").is_some());

        let items: Vec<_> = root
            .find_by_key("list")
            .unwrap()
            .children()
            .iter()
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(items, vec!["Banana"]);
    }

    #[test]
    fn test_readonly_suppresses_affordances() {
        let owner = ComponentId::new();
        let p = props(&["Apple"]).multi_select(true).clearable(true).readonly(true);
        let nodes = render_combo_box(owner, &ComboBoxState::default(), &p);
        let root = &nodes[0];

        assert!(root.find_by_key("clear").is_none());
        assert!(root.find_by_key("chip-remove:0").is_none());
        let input = root.find_by_key("input").unwrap();
        assert!(input.has_attribute("readonly"));
        assert_eq!(input.attribute("placeholder"), Some(""));
    }

    #[test]
    fn test_highlight_and_create_markers() {
        let owner = ComponentId::new();
        let p = props(&[]).creatable(true);
        let state = ComboBoxState {
            open: true,
            text: "B".to_string(),
            highlighted: Some(1),
        };
        let nodes = render_combo_box(owner, &state, &p);
        let create = nodes[0].find_by_key("item:0").unwrap();
        let banana = nodes[0].find_by_key("item:1").unwrap();

        assert!(create.has_attribute("data-create"));
        assert_eq!(create.text(), Some("Create \"B\"..."));
        assert!(banana.has_attribute("data-highlighted"));
        assert_eq!(banana.attribute("aria-selected"), Some("true"));
    }

    #[test]
    fn test_colour_swatches() {
        let owner = ComponentId::new();
        let mut p = props(&["Apple"]).multi_select(true);
        p.accessors = p.accessors.clone().with_colour(|s: &&'static str| format!("#{}", s.len()));
        let nodes = render_combo_box(owner, &open(), &p);

        assert_eq!(nodes[0].find_by_key("chip:0").unwrap().attribute("data-colour"), Some("#5"));
        assert_eq!(nodes[0].find_by_key("item:0").unwrap().attribute("data-colour"), Some("#6"));
    }

    #[test]
    fn test_nodes_carry_dom_anchor() {
        let owner = ComponentId::new();
        let nodes = render_combo_box(owner, &ComboBoxState::default(), &props(&[]));
        let expected = format!("{owner}/input");
        assert_eq!(
            nodes[0].find_by_key("input").unwrap().attribute("data-node"),
            Some(expected.as_str())
        );
    }
}
