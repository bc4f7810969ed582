//! Construction contract for the combo box

use std::hash::Hash;

use super::filter::{compute_candidates, FilterOptions};
use super::{Accessors, Candidate, CreateLabel, Effect};
use crate::component::{callback, Callback};

/// Default input placeholder
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// Default text of the empty-list entry
pub const DEFAULT_NO_RESULTS_TEXT: &str = "No results found";

/// Properties for the ComboBox component
///
/// `items` and `selected_items` are snapshots owned by the caller. The combo
/// box never edits them; it reports the selection it wants through the
/// callbacks and expects the caller to pass the new selection back in.
#[derive(Debug)]
pub struct ComboBoxProps<T, K> {
    /// Full candidate set
    pub items: Vec<T>,
    /// Current selection
    pub selected_items: Vec<T>,
    /// Label / value / colour projections
    pub accessors: Accessors<T, K>,
    /// Allow more than one selected item
    pub multi_select: bool,
    /// Show the clear affordance while something is selected
    pub clearable: bool,
    /// Offer to create items from unmatched text
    pub creatable: bool,
    /// Label formatter for the create entry
    pub create_label: CreateLabel,
    /// Disable every mutating interaction
    pub readonly: bool,
    /// Input placeholder
    pub placeholder: String,
    /// Text of the empty-list entry
    pub no_results_text: String,
    /// Render nothing while staying mounted
    pub hidden: bool,
    /// Fired on every change to the selection
    pub on_change: Option<Callback<Vec<T>>>,
    /// Fired when an item is added in multi-select mode
    pub on_add: Option<Callback<T>>,
    /// Fired when an item is removed in multi-select mode
    pub on_remove: Option<Callback<T>>,
    /// Fired with the typed text when the create entry is chosen
    pub on_create: Option<Callback<String>>,
    /// Fired whenever the user edits the filter text
    pub on_search: Option<Callback<String>>,
}

impl<T: Clone, K> Clone for ComboBoxProps<T, K> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            selected_items: self.selected_items.clone(),
            accessors: self.accessors.clone(),
            multi_select: self.multi_select,
            clearable: self.clearable,
            creatable: self.creatable,
            create_label: self.create_label.clone(),
            readonly: self.readonly,
            placeholder: self.placeholder.clone(),
            no_results_text: self.no_results_text.clone(),
            hidden: self.hidden,
            on_change: self.on_change.clone(),
            on_add: self.on_add.clone(),
            on_remove: self.on_remove.clone(),
            on_create: self.on_create.clone(),
            on_search: self.on_search.clone(),
        }
    }
}

impl<T, K> ComboBoxProps<T, K>
where
    T: Clone,
    K: Eq + Hash,
{
    /// Props with the required fields set and everything else defaulted
    pub fn new(items: Vec<T>, selected_items: Vec<T>, accessors: Accessors<T, K>) -> Self {
        Self {
            items,
            selected_items,
            accessors,
            multi_select: false,
            clearable: false,
            creatable: false,
            create_label: CreateLabel::default(),
            readonly: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            no_results_text: DEFAULT_NO_RESULTS_TEXT.to_string(),
            hidden: false,
            on_change: None,
            on_add: None,
            on_remove: None,
            on_create: None,
            on_search: None,
        }
    }

    pub fn multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn creatable(mut self, creatable: bool) -> Self {
        self.creatable = creatable;
        self
    }

    pub fn create_label(mut self, format: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.create_label = CreateLabel::new(format);
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn on_change(mut self, f: impl Fn(Vec<T>) + Send + Sync + 'static) -> Self {
        self.on_change = Some(callback(f));
        self
    }

    pub fn on_add(mut self, f: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.on_add = Some(callback(f));
        self
    }

    pub fn on_remove(mut self, f: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.on_remove = Some(callback(f));
        self
    }

    pub fn on_create(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_create = Some(callback(f));
        self
    }

    pub fn on_search(mut self, f: impl Fn(String) + Send + Sync + 'static) -> Self {
        self.on_search = Some(callback(f));
        self
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            multi_select: self.multi_select,
            creatable: self.creatable,
        }
    }

    /// Candidate list for the given filter text
    pub fn candidates(&self, filter_text: &str) -> Vec<Candidate<T>> {
        compute_candidates(
            &self.items,
            filter_text,
            &self.selected_items,
            &self.accessors,
            self.filter_options(),
            &self.create_label,
        )
    }

    /// Whether the clear affordance is active
    pub fn can_clear(&self) -> bool {
        self.clearable && !self.readonly && !self.selected_items.is_empty()
    }

    /// Invoke the callbacks for each effect, in order
    pub fn emit(&self, effects: Vec<Effect<T>>) {
        for effect in effects {
            match effect {
                Effect::Change(items) => {
                    if let Some(cb) = &self.on_change {
                        cb.call(items);
                    }
                }
                Effect::Add(item) => {
                    if let Some(cb) = &self.on_add {
                        cb.call(item);
                    }
                }
                Effect::Remove(item) => {
                    if let Some(cb) = &self.on_remove {
                        cb.call(item);
                    }
                }
                Effect::Create(text) => {
                    if let Some(cb) = &self.on_create {
                        cb.call(text);
                    }
                }
                Effect::Search(text) => {
                    if let Some(cb) = &self.on_search {
                        cb.call(text);
                    }
                }
            }
        }
    }
}
