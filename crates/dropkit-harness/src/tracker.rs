#![forbid(unsafe_code)]

//! Scripted rectangle tracker.
//!
//! Replays a fixed list of events and records every call made on it, so
//! tests can assert on feedback (how often the rectangle was reassigned,
//! which cursors were shown) and on whether the tracker was used at all.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use dropkit::toolkit::{Tracker, TrackerFeedback};
use dropkit_core::cursor::CursorGlyph;
use dropkit_core::event::{CancelReason, TrackerEvent};
use dropkit_core::geometry::{Point, Rect};
use serde_json::json;

/// One call observed by a [`ScriptedTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerCall {
    SetRectangle(Rect),
    SetCursor(CursorGlyph),
    Poll(TrackerEvent),
}

/// Tracker that replays events and moves a shared pointer as it goes.
///
/// When the script runs out the tracker reports a host cancellation, so a
/// forgotten release cannot hang a test.
#[derive(Debug)]
pub struct ScriptedTracker {
    pointer: Rc<Cell<Point>>,
    events: VecDeque<TrackerEvent>,
    rect: Rect,
    calls: Vec<TrackerCall>,
}

impl ScriptedTracker {
    /// Create a tracker over `pointer` that will replay `events`.
    #[must_use]
    pub fn new(pointer: Rc<Cell<Point>>, events: impl IntoIterator<Item = TrackerEvent>) -> Self {
        Self {
            pointer,
            events: events.into_iter().collect(),
            rect: Rect::default(),
            calls: Vec::new(),
        }
    }

    /// Every call, in order.
    #[must_use]
    pub fn calls(&self) -> &[TrackerCall] {
        &self.calls
    }

    /// True if nothing was ever called on this tracker.
    #[must_use]
    pub fn untouched(&self) -> bool {
        self.calls.is_empty()
    }

    /// Number of `set_rectangle` calls.
    #[must_use]
    pub fn set_rectangle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, TrackerCall::SetRectangle(_)))
            .count()
    }

    /// Number of events handed out.
    #[must_use]
    pub fn polls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, TrackerCall::Poll(_)))
            .count()
    }

    /// Cursor glyphs shown, in order.
    #[must_use]
    pub fn cursor_history(&self) -> Vec<CursorGlyph> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TrackerCall::SetCursor(g) => Some(*g),
                _ => None,
            })
            .collect()
    }

    /// Last cursor glyph shown.
    #[must_use]
    pub fn cursor(&self) -> Option<CursorGlyph> {
        self.cursor_history().last().copied()
    }

    /// Events not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Call log as JSON lines, for failure diagnostics.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        self.calls
            .iter()
            .map(|call| {
                let value = match call {
                    TrackerCall::SetRectangle(r) => {
                        json!({"call": "set_rectangle", "rect": [r.x, r.y, r.width, r.height]})
                    }
                    TrackerCall::SetCursor(g) => {
                        json!({"call": "set_cursor", "cursor": g.as_str()})
                    }
                    TrackerCall::Poll(event) => event_json(event),
                };
                value.to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn event_json(event: &TrackerEvent) -> serde_json::Value {
    match event {
        TrackerEvent::Moved(p) => json!({"call": "poll", "event": "moved", "at": [p.x, p.y]}),
        TrackerEvent::Released(p) => json!({"call": "poll", "event": "released", "at": [p.x, p.y]}),
        TrackerEvent::Cancelled(reason) => {
            json!({"call": "poll", "event": "cancelled", "reason": reason.as_str()})
        }
    }
}

impl TrackerFeedback for ScriptedTracker {
    fn rectangle(&self) -> Rect {
        self.rect
    }

    fn set_rectangle(&mut self, rect: Rect) {
        self.calls.push(TrackerCall::SetRectangle(rect));
        self.rect = rect;
    }

    fn set_cursor(&mut self, cursor: CursorGlyph) {
        self.calls.push(TrackerCall::SetCursor(cursor));
    }
}

impl Tracker for ScriptedTracker {
    fn next_event(&mut self) -> TrackerEvent {
        let event = self
            .events
            .pop_front()
            .unwrap_or(TrackerEvent::Cancelled(CancelReason::Host));
        if let TrackerEvent::Moved(at) | TrackerEvent::Released(at) = event {
            self.pointer.set(at);
        }
        self.calls.push(TrackerCall::Poll(event));
        event
    }
}
