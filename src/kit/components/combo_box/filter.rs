//! Candidate list derivation
//!
//! The dropdown contents are a pure function of the item set, the filter
//! text and (in multi-select mode) the current selection.

use std::hash::Hash;

use super::{Accessors, Candidate, CreateLabel};
use crate::kit::utils::string::{eq_ignore_case, starts_with_ignore_case};

/// Mode flags that shape the candidate list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Exclude already-selected items
    pub multi_select: bool,
    /// Offer a create entry for unmatched text
    pub creatable: bool,
}

/// Compute the dropdown contents.
///
/// 1. Start from `items`, in order.
/// 2. In multi-select mode drop every item whose key is in `selected_items`.
/// 3. Keep items whose label starts with `filter_text`, ignoring case.
/// 4. When creatable, the filter text is non-empty and no item's label
///    equals it (ignoring case), put a create entry first.
pub fn compute_candidates<T, K>(
    items: &[T],
    filter_text: &str,
    selected_items: &[T],
    accessors: &Accessors<T, K>,
    options: FilterOptions,
    create_label: &CreateLabel,
) -> Vec<Candidate<T>>
where
    T: Clone,
    K: Eq + Hash,
{
    let excluded = if options.multi_select {
        accessors.keys(selected_items)
    } else {
        Default::default()
    };

    let mut candidates: Vec<Candidate<T>> = items
        .iter()
        .filter(|item| excluded.is_empty() || !excluded.contains(&accessors.value(item)))
        .filter(|item| starts_with_ignore_case(&accessors.label(item), filter_text))
        .cloned()
        .map(Candidate::Item)
        .collect();

    if options.creatable && !filter_text.is_empty() {
        let exact = items
            .iter()
            .any(|item| eq_ignore_case(&accessors.label(item), filter_text));
        if !exact {
            candidates.insert(
                0,
                Candidate::Create {
                    text: filter_text.to_string(),
                    label: create_label.format(filter_text),
                },
            );
        }
    }

    candidates
}
