//! Accessor functions: the only coupling between the combo box and the
//! caller's item type

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

type LabelFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type ValueFn<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Label / value / colour projections over an item type `T`
///
/// `value` must return a key that is stable across renders of the same
/// logical item and unique across distinct items. Duplicate keys are not
/// detected.
pub struct Accessors<T, K> {
    label: LabelFn<T>,
    value: ValueFn<T, K>,
    colour: Option<LabelFn<T>>,
}

impl<T, K> Clone for Accessors<T, K> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            value: self.value.clone(),
            colour: self.colour.clone(),
        }
    }
}

impl<T, K> fmt::Debug for Accessors<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors")
            .field("label", &"[Fn]")
            .field("value", &"[Fn]")
            .field("colour", &self.colour.as_ref().map(|_| "[Fn]"))
            .finish()
    }
}

impl<T, K: Eq + Hash> Accessors<T, K> {
    /// Create accessors from a label and a value projection
    pub fn new(
        label: impl Fn(&T) -> String + Send + Sync + 'static,
        value: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: Arc::new(label),
            value: Arc::new(value),
            colour: None,
        }
    }

    /// Add a colour swatch projection
    pub fn with_colour(mut self, colour: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.colour = Some(Arc::new(colour));
        self
    }

    pub fn label(&self, item: &T) -> String {
        (self.label)(item)
    }

    pub fn value(&self, item: &T) -> K {
        (self.value)(item)
    }

    /// Colour of the item, if a colour projection was supplied
    pub fn colour(&self, item: &T) -> Option<String> {
        self.colour.as_ref().map(|colour| colour(item))
    }

    /// Whether two items are the same logical item
    pub fn same_item(&self, a: &T, b: &T) -> bool {
        self.value(a) == self.value(b)
    }

    /// Keys of all the given items
    pub fn keys(&self, items: &[T]) -> HashSet<K> {
        items.iter().map(|item| self.value(item)).collect()
    }

    /// Whether `items` holds an item with the same key as `item`
    pub fn contains(&self, items: &[T], item: &T) -> bool {
        let key = self.value(item);
        items.iter().any(|other| self.value(other) == key)
    }
}
