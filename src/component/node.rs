//! View tree produced by component rendering

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// Unique identifier for a component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Allocate a fresh identifier
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(1);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Identifies a rendered node: the component that rendered it plus a key
/// that is stable across renders of that component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId {
    /// Component that rendered the node
    pub owner: ComponentId,
    /// Render-stable key within the owner
    pub key: String,
}

impl NodeId {
    pub fn new(owner: ComponentId, key: impl Into<String>) -> Self {
        Self {
            owner,
            key: key.into(),
        }
    }

    /// Parse the `owner/key` form produced by `Display`
    pub fn parse(s: &str) -> Option<Self> {
        let (owner, key) = s.split_once('/')?;
        let owner = owner.strip_prefix('c')?.parse().ok()?;
        if key.is_empty() {
            return None;
        }
        Some(Self::new(ComponentId(owner), key))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.key)
    }
}

/// A node in the UI tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Node ID
    id: NodeId,

    /// Element tag
    tag: &'static str,

    /// Node attributes, ordered by name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,

    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    /// Child nodes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// Create an empty element
    pub fn new(tag: &'static str, id: NodeId) -> Self {
        Self {
            id,
            tag,
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Set a boolean attribute when `on` is true
    pub fn with_flag(self, name: &str, on: bool) -> Self {
        if on {
            self.with_attr(name, "")
        } else {
            self
        }
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn key(&self) -> &str {
        &self.id.key
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get a reference to this node's children
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Find a node in this subtree by id
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Find the first node in this subtree with the given key
    pub fn find_by_key(&self, key: &str) -> Option<&Node> {
        if self.id.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_key(key))
    }

    /// Whether `id` is this node or one of its descendants
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Nodes from this node down to `id`, inclusive, or `None` if `id` is
    /// not in this subtree
    pub fn path_to(&self, id: &NodeId) -> Option<Vec<&Node>> {
        if &self.id == id {
            return Some(vec![self]);
        }
        for child in &self.children {
            if let Some(mut path) = child.path_to(id) {
                path.insert(0, self);
                return Some(path);
            }
        }
        None
    }

    /// Depth-first iterator over this node and its descendants
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }
}
