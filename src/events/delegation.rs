//! Event propagation for combokit components
//!
//! Pointer events are delivered to the target node first and then bubble
//! up through its ancestors until a handler stops propagation.

use crate::component::{Node, NodeId};

/// Specifies the event propagation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationPhase {
    /// Event is at the target node
    Target,

    /// Event is traveling up from target to root (DOM bubbling phase)
    Bubbling,
}

/// Controls how an event propagates through the node tree
#[derive(Debug, Clone)]
pub struct EventPropagation {
    /// Whether the event should continue propagating
    stopped: bool,

    /// The current propagation phase
    pub phase: PropagationPhase,

    /// The node that is the original target of the event
    pub target_id: Option<NodeId>,
}

impl EventPropagation {
    /// Create a new event propagation aimed at `target_id`
    pub fn new(target_id: Option<NodeId>) -> Self {
        Self {
            stopped: false,
            phase: PropagationPhase::Target,
            target_id,
        }
    }

    /// Stop event propagation
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    /// Check if propagation is stopped
    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped
    }
}

/// Nodes an event visits when it bubbles from `target` to `root`, target
/// first. Empty when the target is not in the tree.
pub fn propagation_path<'a>(root: &'a Node, target: &NodeId) -> Vec<&'a Node> {
    let mut path = root.path_to(target).unwrap_or_default();
    path.reverse();
    path
}

/// Walk the bubbling path, calling `handler` on each node until it stops
/// propagation. Returns the final propagation state.
pub fn bubble<F>(root: &Node, target: &NodeId, mut handler: F) -> EventPropagation
where
    F: FnMut(&Node, &mut EventPropagation),
{
    let mut propagation = EventPropagation::new(Some(target.clone()));
    for (depth, node) in propagation_path(root, target).into_iter().enumerate() {
        propagation.phase = if depth == 0 {
            PropagationPhase::Target
        } else {
            PropagationPhase::Bubbling
        };
        handler(node, &mut propagation);
        if propagation.is_propagation_stopped() {
            break;
        }
    }
    propagation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentId;

    fn tree(owner: ComponentId) -> Node {
        Node::new("div", NodeId::new(owner, "container")).with_child(
            Node::new("ul", NodeId::new(owner, "list"))
                .with_child(Node::new("li", NodeId::new(owner, "item:0"))),
        )
    }

    #[test]
    fn test_bubbles_target_first() {
        let owner = ComponentId::new();
        let root = tree(owner);
        let mut visited = Vec::new();
        let propagation = bubble(&root, &NodeId::new(owner, "item:0"), |node, prop| {
            visited.push((node.key().to_string(), prop.phase));
        });

        assert!(!propagation.is_propagation_stopped());
        assert_eq!(
            visited,
            vec![
                ("item:0".to_string(), PropagationPhase::Target),
                ("list".to_string(), PropagationPhase::Bubbling),
                ("container".to_string(), PropagationPhase::Bubbling),
            ]
        );
    }

    #[test]
    fn test_stop_propagation_halts_bubbling() {
        let owner = ComponentId::new();
        let root = tree(owner);
        let mut visited = Vec::new();
        let propagation = bubble(&root, &NodeId::new(owner, "item:0"), |node, prop| {
            visited.push(node.key().to_string());
            if node.key() == "item:0" {
                prop.stop_propagation();
            }
        });

        assert!(propagation.is_propagation_stopped());
        assert_eq!(visited, vec!["item:0".to_string()]);
    }

    #[test]
    fn test_unknown_target_visits_nothing() {
        let owner = ComponentId::new();
        let root = tree(owner);
        assert!(propagation_path(&root, &NodeId::new(owner, "missing")).is_empty());
    }
}
