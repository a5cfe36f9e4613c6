#![forbid(unsafe_code)]

//! Minimal in-crate toolkit and tracker fixtures for unit tests.

use dropkit_core::cursor::CursorGlyph;
use dropkit_core::event::TrackerEvent;
use dropkit_core::geometry::{Point, Rect};

use std::collections::VecDeque;

use crate::toolkit::{Tracker, TrackerFeedback, WidgetToolkit, display_bounds};

#[derive(Debug, Default)]
pub(crate) struct TreeToolkit {
    nodes: Vec<(Option<u32>, Rect)>,
    pub(crate) pointer: Point,
    pub(crate) under_pointer: Option<u32>,
}

impl TreeToolkit {
    pub(crate) fn add(&mut self, parent: Option<u32>, bounds: Rect) -> u32 {
        self.nodes.push((parent, bounds));
        (self.nodes.len() - 1) as u32
    }

    fn children(&self, of: u32) -> impl Iterator<Item = u32> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, (p, _))| *p == Some(of))
            .map(|(i, _)| i as u32)
    }
}

impl WidgetToolkit for TreeToolkit {
    type Widget = u32;

    fn parent(&self, widget: u32) -> Option<u32> {
        self.nodes[widget as usize].0
    }

    fn bounds(&self, widget: u32) -> Rect {
        self.nodes[widget as usize].1
    }

    fn to_display(&self, reference: u32, rect: Rect) -> Rect {
        rect.relative_to(display_bounds(self, reference).origin())
    }

    fn cursor_control(&self) -> Option<u32> {
        self.under_pointer
    }

    fn cursor_location(&self) -> Point {
        self.pointer
    }

    fn find_control(&self, shells: &[u32], at: Point) -> Option<u32> {
        let mut found = None;
        let mut level: Vec<u32> = shells.to_vec();
        while let Some(hit) = level
            .iter()
            .copied()
            .find(|w| display_bounds(self, *w).contains(at))
        {
            found = Some(hit);
            level = self.children(hit).collect();
        }
        found
    }
}

#[derive(Debug, Default)]
pub(crate) struct QueueTracker {
    pub(crate) rect: Rect,
    pub(crate) cursor: Option<CursorGlyph>,
    pub(crate) set_rect_calls: usize,
    pub(crate) polls: usize,
    pub(crate) events: VecDeque<TrackerEvent>,
}

impl QueueTracker {
    pub(crate) fn with_events(events: impl IntoIterator<Item = TrackerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl TrackerFeedback for QueueTracker {
    fn rectangle(&self) -> Rect {
        self.rect
    }

    fn set_rectangle(&mut self, rect: Rect) {
        self.set_rect_calls += 1;
        self.rect = rect;
    }

    fn set_cursor(&mut self, cursor: CursorGlyph) {
        self.cursor = Some(cursor);
    }
}

impl Tracker for QueueTracker {
    fn next_event(&mut self) -> TrackerEvent {
        self.polls += 1;
        self.events
            .pop_front()
            .unwrap_or(TrackerEvent::Cancelled(dropkit_core::event::CancelReason::Host))
    }
}
