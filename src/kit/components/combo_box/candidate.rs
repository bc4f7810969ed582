//! Entries of the dropdown list

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::Accessors;

/// One selectable entry in the open dropdown
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate<T> {
    /// An existing item
    Item(T),
    /// "Create a new item from this text"
    Create {
        /// The text the user typed
        text: String,
        /// Display label produced by the create-label formatter
        label: String,
    },
}

impl<T> Candidate<T> {
    /// Text shown for this candidate
    pub fn label<K: Eq + Hash>(&self, accessors: &Accessors<T, K>) -> String {
        match self {
            Candidate::Item(item) => accessors.label(item),
            Candidate::Create { label, .. } => label.clone(),
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Candidate::Create { .. })
    }

    /// The underlying item, unless this is the create entry
    pub fn item(&self) -> Option<&T> {
        match self {
            Candidate::Item(item) => Some(item),
            Candidate::Create { .. } => None,
        }
    }
}

/// Formats the label of the create entry from the typed text
#[derive(Clone)]
pub struct CreateLabel(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl CreateLabel {
    pub fn new(format: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(format))
    }

    pub fn format(&self, text: &str) -> String {
        (self.0)(text)
    }
}

impl Default for CreateLabel {
    fn default() -> Self {
        Self::new(|text| format!("Create \"{text}\"..."))
    }
}

impl fmt::Debug for CreateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CreateLabel(..)")
    }
}
