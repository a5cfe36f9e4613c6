#![forbid(unsafe_code)]

//! Drag-over listener registry.
//!
//! Listeners are kept in a side-table keyed by widget identity, plus one
//! global list of default listeners consulted when no widget claims a drag.
//!
//! # Invariants
//!
//! 1. Listener order within a list is insertion order, which is also
//!    resolution priority.
//! 2. A widget whose list becomes empty is removed from the table; no empty
//!    list stays attached.
//! 3. Registering the same listener twice yields two entries; removal drops
//!    every entry with that identity.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::target::ListenerRef;

/// Per-widget and default drag-over listeners.
pub struct TargetRegistry<W> {
    lists: HashMap<W, Vec<ListenerRef<W>>>,
    defaults: Vec<ListenerRef<W>>,
}

impl<W> Default for TargetRegistry<W> {
    fn default() -> Self {
        Self {
            lists: HashMap::new(),
            defaults: Vec::new(),
        }
    }
}

impl<W: fmt::Debug> fmt::Debug for TargetRegistry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRegistry")
            .field(
                "lists",
                &self
                    .lists
                    .iter()
                    .map(|(w, l)| (w, l.len()))
                    .collect::<Vec<_>>(),
            )
            .field("defaults", &self.defaults.len())
            .finish()
    }
}

impl<W: Copy + Eq + Hash + fmt::Debug> TargetRegistry<W> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` on `widget`, or as a default when `widget` is `None`.
    pub fn add_target(&mut self, widget: Option<W>, listener: ListenerRef<W>) {
        match widget {
            None => {
                self.defaults.push(listener);
                tracing::trace!(count = self.defaults.len(), "default drop listener added");
            }
            Some(widget) => {
                let list = self.lists.entry(widget).or_default();
                list.push(listener);
                tracing::trace!(?widget, count = list.len(), "drop listener added");
            }
        }
    }

    /// Remove every registration of `listener` from `widget` (or from the
    /// defaults when `widget` is `None`). Returns how many entries were removed.
    pub fn remove_target(&mut self, widget: Option<W>, listener: &ListenerRef<W>) -> usize {
        match widget {
            None => remove_all(&mut self.defaults, listener),
            Some(widget) => {
                let Some(list) = self.lists.get_mut(&widget) else {
                    return 0;
                };
                let removed = remove_all(list, listener);
                if list.is_empty() {
                    self.lists.remove(&widget);
                    tracing::trace!(?widget, "drop listener list detached");
                }
                removed
            }
        }
    }

    /// Listeners registered on `widget`, in priority order.
    #[must_use]
    pub fn targets_for(&self, widget: W) -> &[ListenerRef<W>] {
        self.lists.get(&widget).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Default listeners, in priority order.
    #[must_use]
    pub fn default_targets(&self) -> &[ListenerRef<W>] {
        &self.defaults
    }

    /// Returns true if `widget` has a listener list attached.
    #[must_use]
    pub fn has_targets(&self, widget: W) -> bool {
        self.lists.contains_key(&widget)
    }

    /// Number of widgets with a listener list attached.
    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if nothing is registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty() && self.defaults.is_empty()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.lists.clear();
        self.defaults.clear();
    }
}

fn remove_all<W>(list: &mut Vec<ListenerRef<W>>, listener: &ListenerRef<W>) -> usize {
    let before = list.len();
    list.retain(|l| !Rc::ptr_eq(l, listener));
    before - list.len()
}
