#![forbid(unsafe_code)]

//! Deterministic in-memory widget tree.
//!
//! Bounds are stored relative to the parent, like a real toolkit reports
//! them, so display-coordinate conversion is exercised for real. Later
//! siblings sit on top of earlier ones for hit testing.

use std::cell::Cell;
use std::rc::Rc;

use dropkit::toolkit::{WidgetToolkit, display_bounds};
use dropkit_core::event::TrackerEvent;
use dropkit_core::geometry::{Point, Rect};

use crate::tracker::ScriptedTracker;

/// Handle to a widget of a [`FakeToolkit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u32);

#[derive(Debug, Clone)]
struct Node {
    parent: Option<WidgetId>,
    bounds: Rect,
    label: String,
}

/// Widget tree plus a pointer shared with the trackers it creates.
#[derive(Debug, Default)]
pub struct FakeToolkit {
    nodes: Vec<Node>,
    shells: Vec<WidgetId>,
    pointer: Rc<Cell<Point>>,
}

impl FakeToolkit {
    /// Create an empty toolkit with the pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level window with display `bounds`.
    pub fn add_shell(&mut self, label: &str, bounds: Rect) -> WidgetId {
        let id = self.push(None, label, bounds);
        self.shells.push(id);
        id
    }

    /// Add a child widget with `bounds` relative to `parent`.
    pub fn add_child(&mut self, parent: WidgetId, label: &str, bounds: Rect) -> WidgetId {
        self.push(Some(parent), label, bounds)
    }

    fn push(&mut self, parent: Option<WidgetId>, label: &str, bounds: Rect) -> WidgetId {
        let id = WidgetId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent,
            bounds,
            label: label.to_string(),
        });
        id
    }

    /// Label given when the widget was added.
    #[must_use]
    pub fn label(&self, widget: WidgetId) -> &str {
        &self.nodes[widget.0 as usize].label
    }

    /// Top-level windows, in creation order.
    #[must_use]
    pub fn shells(&self) -> &[WidgetId] {
        &self.shells
    }

    /// Move the pointer.
    pub fn set_pointer(&self, at: Point) {
        self.pointer.set(at);
    }

    /// Current pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer.get()
    }

    /// The most specific widget at `at` across all windows.
    #[must_use]
    pub fn widget_at(&self, at: Point) -> Option<WidgetId> {
        self.find_control(&self.shells, at)
    }

    /// Create a tracker that replays `events` and moves this toolkit's
    /// pointer as it does.
    #[must_use]
    pub fn tracker(&self, events: impl IntoIterator<Item = TrackerEvent>) -> ScriptedTracker {
        ScriptedTracker::new(self.pointer.clone(), events)
    }

    fn children(&self, of: WidgetId) -> impl Iterator<Item = WidgetId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == Some(of))
            .map(|(i, _)| WidgetId(i as u32))
    }

    fn topmost_hit(&self, candidates: &[WidgetId], at: Point) -> Option<WidgetId> {
        candidates
            .iter()
            .rev()
            .copied()
            .find(|w| display_bounds(self, *w).contains(at))
    }
}

impl WidgetToolkit for FakeToolkit {
    type Widget = WidgetId;

    fn parent(&self, widget: WidgetId) -> Option<WidgetId> {
        self.nodes[widget.0 as usize].parent
    }

    fn bounds(&self, widget: WidgetId) -> Rect {
        self.nodes[widget.0 as usize].bounds
    }

    fn to_display(&self, reference: WidgetId, rect: Rect) -> Rect {
        rect.relative_to(display_bounds(self, reference).origin())
    }

    fn cursor_control(&self) -> Option<WidgetId> {
        self.widget_at(self.pointer.get())
    }

    fn cursor_location(&self) -> Point {
        self.pointer.get()
    }

    fn find_control(&self, shells: &[WidgetId], at: Point) -> Option<WidgetId> {
        let mut hit = self.topmost_hit(shells, at)?;
        loop {
            let children: Vec<WidgetId> = self.children(hit).collect();
            match self.topmost_hit(&children, at) {
                Some(child) => hit = child,
                None => return Some(hit),
            }
        }
    }
}
