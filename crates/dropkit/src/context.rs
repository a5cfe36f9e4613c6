#![forbid(unsafe_code)]

//! Drag-and-drop context.
//!
//! [`DragContext`] owns everything a host's window manager needs for drag
//! and drop: the listener registry, the configuration, and the forced drop
//! location used by tests. Create one at window-manager start-up and drop it
//! at teardown.
//!
//! The context holds `Rc` listener handles and is therefore confined to the
//! thread that created it, which is the GUI thread in practice.

use std::fmt::Debug;
use std::hash::Hash;

use dropkit_core::config::DragConfig;

use crate::forced::ForcedDropLocation;
use crate::registry::TargetRegistry;
use crate::resolver;
use crate::session::{DragRequest, DragSession, SessionStep};
use crate::target::{DropQuery, DropTarget, ListenerRef};
use crate::toolkit::{Tracker, WidgetToolkit};

/// Registry, configuration, and test override for one host.
#[derive(Debug)]
pub struct DragContext<W> {
    registry: TargetRegistry<W>,
    forced: Option<ForcedDropLocation<W>>,
    config: DragConfig,
}

impl<W> Default for DragContext<W> {
    fn default() -> Self {
        Self {
            registry: TargetRegistry::default(),
            forced: None,
            config: DragConfig::default(),
        }
    }
}

impl<W: Copy + Eq + Hash + Debug> DragContext<W> {
    /// Create a context with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with the given configuration.
    #[must_use]
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a context configured from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_config(DragConfig::from_env())
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Replace the configuration. Applies to sessions begun afterwards.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    /// The listener registry.
    #[must_use]
    pub fn registry(&self) -> &TargetRegistry<W> {
        &self.registry
    }

    /// Register `listener` on `widget`, or as a default when `widget` is `None`.
    pub fn add_target(&mut self, widget: Option<W>, listener: ListenerRef<W>) {
        self.registry.add_target(widget, listener);
    }

    /// Remove every registration of `listener` from `widget` (or from the
    /// defaults). Returns how many entries were removed.
    pub fn remove_target(&mut self, widget: Option<W>, listener: &ListenerRef<W>) -> usize {
        self.registry.remove_target(widget, listener)
    }

    /// Set or clear the forced drop location. Takes effect on the next drag.
    pub fn set_forced_location(&mut self, forced: Option<ForcedDropLocation<W>>) {
        tracing::debug!(forced = forced.is_some(), "forced drop location updated");
        self.forced = forced;
    }

    /// The forced drop location, if set.
    #[must_use]
    pub fn forced_location(&self) -> Option<&ForcedDropLocation<W>> {
        self.forced.as_ref()
    }

    /// Resolve the drop target for `query`, starting at `widget`.
    pub fn resolve<T>(
        &self,
        toolkit: &T,
        widget: Option<W>,
        query: &DropQuery<'_>,
    ) -> Option<Box<dyn DropTarget>>
    where
        T: WidgetToolkit<Widget = W> + ?Sized,
    {
        resolver::resolve(&self.registry, toolkit, widget, query)
    }

    /// Track a drag until it ends and return the target that will take it.
    ///
    /// Blocks in [`Tracker::next_event`] until the pointer is released or
    /// the drag is cancelled. A returned target has not been notified yet:
    /// call `commit()` and then `cancel(true)` on it. Cancelled drags have
    /// already notified their target and return `None`.
    pub fn drag_to_target<T, K>(
        &self,
        toolkit: &T,
        tracker: &mut K,
        request: DragRequest,
    ) -> Option<Box<dyn DropTarget>>
    where
        T: WidgetToolkit<Widget = W> + ?Sized,
        K: Tracker + ?Sized,
    {
        let mut session = DragSession::new(request);
        let mut step = session.begin(self, toolkit, tracker);
        loop {
            if let SessionStep::Finished(outcome) = step {
                return outcome.into_target();
            }
            let event = tracker.next_event();
            step = session.handle_event(self, toolkit, tracker, event);
        }
    }

    /// Run a drag and, if it lands on a target, perform the drop.
    ///
    /// Returns true iff a target committed the drop.
    pub fn perform_drag<T, K>(&self, toolkit: &T, tracker: &mut K, request: DragRequest) -> bool
    where
        T: WidgetToolkit<Widget = W> + ?Sized,
        K: Tracker + ?Sized,
    {
        let Some(mut target) = self.drag_to_target(toolkit, tracker, request) else {
            return false;
        };
        target.commit();
        target.cancel(true);
        true
    }
}
