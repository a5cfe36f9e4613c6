#![forbid(unsafe_code)]

//! Recording listeners and targets.
//!
//! Every listener and target writes to a shared [`CallLog`] as
//! `"<name>:<call>"` entries, so a test can assert on the exact order of
//! commit and cancel notifications across several targets.

use std::cell::RefCell;
use std::rc::Rc;

use dropkit::target::{DragOverListener, DropQuery, DropTarget, ListenerRef};
use dropkit_core::cursor::CursorGlyph;
use dropkit_core::geometry::{Point, Rect};

use crate::toolkit::WidgetId;

/// Shared, ordered record of target notifications.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }

    /// Snapshot of all entries.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Take all entries, leaving the log empty.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    /// Number of entries equal to `entry`.
    #[must_use]
    pub fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }
}

/// When a [`RecordingListener`] accepts a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptRule {
    Always,
    Never,
    /// Pointer inside this display rectangle.
    Within(Rect),
    /// Payload kind matches this pattern (see `DragPayload::matches_kind`).
    Kind(String),
}

impl AcceptRule {
    fn accepts(&self, query: &DropQuery<'_>) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Within(rect) => rect.contains(query.position),
            Self::Kind(pattern) => query.payload.matches_kind(pattern),
        }
    }
}

/// A query as seen by a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeenQuery {
    pub widget: Option<WidgetId>,
    pub position: Point,
    pub drag_rect: Rect,
}

/// Target that logs `commit` and `cancel` calls.
#[derive(Debug)]
pub struct RecordingTarget {
    name: String,
    snap: Rect,
    cursor: CursorGlyph,
    log: CallLog,
}

impl DropTarget for RecordingTarget {
    fn snap_rectangle(&self) -> Rect {
        self.snap
    }

    fn cursor(&self) -> CursorGlyph {
        self.cursor
    }

    fn commit(&mut self) {
        self.log.push(format!("{}:commit", self.name));
    }

    fn cancel(&mut self, was_dropped: bool) {
        self.log.push(format!("{}:cancel({was_dropped})", self.name));
    }
}

/// Listener that produces [`RecordingTarget`]s and remembers its queries.
#[derive(Debug)]
pub struct RecordingListener {
    name: String,
    rule: AcceptRule,
    snap: Rect,
    cursor: CursorGlyph,
    log: CallLog,
    seen: RefCell<Vec<SeenQuery>>,
}

impl RecordingListener {
    /// Listener accepting everything with no snap preview and a centre cursor.
    #[must_use]
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            rule: AcceptRule::Always,
            snap: Rect::default(),
            cursor: CursorGlyph::Center,
            log: log.clone(),
            seen: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn accepting(mut self, rule: AcceptRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub fn snap(mut self, rect: Rect) -> Self {
        self.snap = rect;
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: CursorGlyph) -> Self {
        self.cursor = cursor;
        self
    }

    /// Share the listener. Keep the returned `Rc` to inspect queries; pass
    /// [`as_listener`] of it to the context.
    #[must_use]
    pub fn shared(self) -> Rc<Self> {
        Rc::new(self)
    }

    /// Queries received so far.
    #[must_use]
    pub fn seen(&self) -> Vec<SeenQuery> {
        self.seen.borrow().clone()
    }

    /// Number of queries received so far.
    #[must_use]
    pub fn query_count(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl DragOverListener<WidgetId> for RecordingListener {
    fn try_accept(
        &self,
        widget: Option<WidgetId>,
        query: &DropQuery<'_>,
    ) -> Option<Box<dyn DropTarget>> {
        self.seen.borrow_mut().push(SeenQuery {
            widget,
            position: query.position,
            drag_rect: query.drag_rect,
        });
        if !self.rule.accepts(query) {
            return None;
        }
        Some(Box::new(RecordingTarget {
            name: self.name.clone(),
            snap: self.snap,
            cursor: self.cursor,
            log: self.log.clone(),
        }))
    }
}

/// Coerce a shared recording listener into a registry handle with the same
/// identity.
#[must_use]
pub fn as_listener(listener: &Rc<RecordingListener>) -> ListenerRef<WidgetId> {
    listener.clone()
}
