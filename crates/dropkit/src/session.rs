#![forbid(unsafe_code)]

//! Drag tracking sessions.
//!
//! A [`DragSession`] follows one drag from start to drop. It is an explicit
//! state machine fed with [`TrackerEvent`]s, so hosts with a non-blocking
//! event model can drive it directly; [`DragContext::drag_to_target`]
//! wraps it in a blocking loop over [`Tracker::next_event`].
//!
//! ```text
//! Idle ──begin──▶ Tracking ──Released + target──▶ Committed
//!   │                 │
//!   │                 └──Released w/o target, Cancelled──▶ Cancelled
//!   └──begin with forced location──▶ Committed | Cancelled
//! ```
//!
//! # Feedback
//!
//! On every move the target under the pointer is re-resolved. Its cursor
//! glyph is shown (or [`CursorGlyph::Invalid`] when nothing accepts). With
//! snapping enabled the tracker rectangle jumps to the target's snap
//! rectangle; targets without a usable snap rectangle, and empty space, get
//! the source rectangle moved by the pointer's displacement from where the
//! drag started. The tracker rectangle is only reassigned when it changes.
//!
//! # Invariants
//!
//! 1. Only the target resolved when tracking ends is notified.
//! 2. A cancelled drag notifies that target with `cancel(false)` exactly once.
//! 3. A forced location never touches the tracker.
//! 4. Events outside the `Tracking` phase are ignored.
//!
//! [`DragContext::drag_to_target`]: crate::DragContext::drag_to_target
//! [`Tracker::next_event`]: crate::toolkit::Tracker::next_event

use std::fmt;

use dropkit_core::cursor::CursorGlyph;
use dropkit_core::event::{CancelReason, TrackerEvent};
use dropkit_core::geometry::{Point, Rect};
use dropkit_core::payload::DragPayload;

use crate::context::DragContext;
use crate::target::{DropQuery, DropTarget};
use crate::toolkit::{TrackerFeedback, WidgetToolkit};

/// Everything needed to start a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragRequest {
    /// The object being dragged.
    pub payload: DragPayload,
    /// Display bounds of the dragged item when the drag started.
    pub source_bounds: Rect,
    /// Pointer position when the drag started.
    pub initial_location: Point,
    /// Whether the tracker rectangle should snap to targets.
    pub allow_snapping: bool,
}

impl DragRequest {
    /// Create a request with snapping allowed.
    #[must_use]
    pub fn new(payload: DragPayload, source_bounds: Rect, initial_location: Point) -> Self {
        Self {
            payload,
            source_bounds,
            initial_location,
            allow_snapping: true,
        }
    }

    /// Disallow snapping for this drag.
    #[must_use]
    pub fn without_snapping(mut self) -> Self {
        self.allow_snapping = false;
        self
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// Created, not yet started.
    Idle,
    /// Following the pointer.
    Tracking,
    /// Ended over a target that will take the drop.
    Committed,
    /// Ended without a drop.
    Cancelled,
}

impl DragPhase {
    /// Returns true for `Committed` and `Cancelled`.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Committed | Self::Cancelled)
    }
}

/// How a drag ended.
pub enum DragOutcome {
    /// Released over `target`. The caller finishes the drop, see
    /// [`complete`](Self::complete).
    Committed(Box<dyn DropTarget>),
    /// Cancelled, or released where nothing accepts the drag.
    Cancelled,
}

impl fmt::Debug for DragOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Committed(target) => f
                .debug_tuple("Committed")
                .field(&target.cursor())
                .finish(),
            Self::Cancelled => f.write_str("Cancelled"),
        }
    }
}

impl DragOutcome {
    /// Returns true if a target took the drag.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// The committed target, if any.
    #[must_use]
    pub fn into_target(self) -> Option<Box<dyn DropTarget>> {
        match self {
            Self::Committed(target) => Some(target),
            Self::Cancelled => None,
        }
    }

    /// Finish the drop: `commit()` then `cancel(true)` on a committed target.
    ///
    /// Returns true if a drop happened.
    pub fn complete(self) -> bool {
        match self {
            Self::Committed(mut target) => {
                target.commit();
                target.cancel(true);
                true
            }
            Self::Cancelled => false,
        }
    }
}

/// Result of feeding a session.
#[derive(Debug)]
pub enum SessionStep {
    /// Still tracking; keep delivering events.
    Tracking,
    /// The input did not apply to the current phase.
    Ignored,
    /// The session ended.
    Finished(DragOutcome),
}

/// One drag, from start to drop.
#[derive(Debug)]
pub struct DragSession {
    request: DragRequest,
    phase: DragPhase,
    snapping: bool,
    cancel_on_escape: bool,
    moves: u64,
}

impl DragSession {
    /// Create an idle session.
    #[must_use]
    pub fn new(request: DragRequest) -> Self {
        Self {
            request,
            phase: DragPhase::Idle,
            snapping: false,
            cancel_on_escape: true,
            moves: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The request this session was created from.
    #[must_use]
    pub fn request(&self) -> &DragRequest {
        &self.request
    }

    /// Effective snapping (request flag and context configuration).
    ///
    /// Only meaningful once the session has begun.
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    /// Number of moves processed while tracking.
    #[must_use]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Start the drag.
    ///
    /// With a forced location on `ctx` the session finishes immediately
    /// without touching `tracker`. Otherwise the tracker is seeded with an
    /// initial rectangle and cursor and the session enters `Tracking`.
    pub fn begin<T, F>(
        &mut self,
        ctx: &DragContext<T::Widget>,
        toolkit: &T,
        tracker: &mut F,
    ) -> SessionStep
    where
        T: WidgetToolkit + ?Sized,
        F: TrackerFeedback + ?Sized,
    {
        if self.phase != DragPhase::Idle {
            return SessionStep::Ignored;
        }
        let config = ctx.config();
        self.snapping = self.request.allow_snapping && config.snapping;
        self.cancel_on_escape = config.cancel_on_escape;

        if let Some(forced) = ctx.forced_location() {
            let widget = toolkit.find_control(&forced.shells, forced.location);
            let query = DropQuery::new(
                &self.request.payload,
                forced.location,
                self.request.source_bounds,
            );
            let target = ctx.resolve(toolkit, widget, &query);
            tracing::debug!(
                drag_event = "forced",
                location = ?forced.location,
                ?widget,
                found = target.is_some(),
                "drag resolved at forced location"
            );
            return SessionStep::Finished(self.conclude(target));
        }

        let mut start_rect = self.request.source_bounds;
        if self.snapping
            && let Some(widget) = toolkit.cursor_control()
        {
            let query = DropQuery::new(
                &self.request.payload,
                self.request.initial_location,
                self.request.source_bounds,
            );
            if let Some(target) = ctx.resolve(toolkit, Some(widget), &query) {
                let snap = target.snap_rectangle();
                if snap.has_extent() {
                    start_rect = snap;
                }
                tracker.set_cursor(target.cursor());
            }
        }
        if start_rect.has_extent() {
            tracker.set_rectangle(start_rect);
        }

        self.phase = DragPhase::Tracking;
        tracing::debug!(
            drag_event = "begin",
            kind = self.request.payload.kind(),
            part = self.request.payload.label(),
            source = ?self.request.source_bounds,
            start = ?start_rect,
            snapping = self.snapping,
            "drag tracking started"
        );
        SessionStep::Tracking
    }

    /// Feed one event.
    pub fn handle_event<T, F>(
        &mut self,
        ctx: &DragContext<T::Widget>,
        toolkit: &T,
        tracker: &mut F,
        event: TrackerEvent,
    ) -> SessionStep
    where
        T: WidgetToolkit + ?Sized,
        F: TrackerFeedback + ?Sized,
    {
        if self.phase != DragPhase::Tracking {
            tracing::trace!(phase = ?self.phase, ?event, "drag event ignored");
            return SessionStep::Ignored;
        }
        tracing::trace!(?event, terminal = event.is_terminal(), "drag event");
        match event {
            TrackerEvent::Moved(location) => {
                self.track_move(ctx, toolkit, tracker, location);
                SessionStep::Tracking
            }
            TrackerEvent::Released(location) => {
                let target = self.final_target(ctx, toolkit, &*tracker, location);
                SessionStep::Finished(self.conclude(target))
            }
            TrackerEvent::Cancelled(CancelReason::Escape) if !self.cancel_on_escape => {
                tracing::trace!("escape ignored while dragging");
                SessionStep::Tracking
            }
            TrackerEvent::Cancelled(reason) => {
                let location = toolkit.cursor_location();
                if let Some(mut target) = self.final_target(ctx, toolkit, &*tracker, location) {
                    target.cancel(false);
                }
                self.phase = DragPhase::Cancelled;
                tracing::debug!(
                    drag_event = "cancelled",
                    reason = reason.as_str(),
                    moves = self.moves,
                    "drag cancelled"
                );
                SessionStep::Finished(DragOutcome::Cancelled)
            }
        }
    }

    fn track_move<T, F>(
        &mut self,
        ctx: &DragContext<T::Widget>,
        toolkit: &T,
        tracker: &mut F,
        location: Point,
    ) where
        T: WidgetToolkit + ?Sized,
        F: TrackerFeedback + ?Sized,
    {
        self.moves += 1;
        let query = DropQuery::new(&self.request.payload, location, tracker.rectangle());
        let target = ctx.resolve(toolkit, toolkit.cursor_control(), &query);

        let (glyph, snap) = match &target {
            Some(target) => (target.cursor(), target.snap_rectangle()),
            None => (CursorGlyph::Invalid, Rect::default()),
        };
        tracker.set_cursor(glyph);
        tracing::trace!(
            drag_event = "hover",
            ?location,
            cursor = glyph.as_str(),
            droppable = glyph.is_valid(),
            "drag hover"
        );

        if !self.snapping {
            return;
        }
        let snap = if snap.has_extent() {
            snap
        } else {
            self.displaced_source(location)
        };
        if tracker.rectangle() != snap {
            tracing::trace!(drag_event = "rect", rect = ?snap, "tracker rectangle updated");
            tracker.set_rectangle(snap);
        }
    }

    /// Source rectangle moved by the pointer's displacement since the start.
    #[must_use]
    pub fn displaced_source(&self, location: Point) -> Rect {
        let (dx, dy) = location.delta_from(self.request.initial_location);
        self.request.source_bounds.translate(dx, dy)
    }

    fn final_target<T, F>(
        &self,
        ctx: &DragContext<T::Widget>,
        toolkit: &T,
        tracker: &F,
        location: Point,
    ) -> Option<Box<dyn DropTarget>>
    where
        T: WidgetToolkit + ?Sized,
        F: TrackerFeedback + ?Sized,
    {
        let query = DropQuery::new(&self.request.payload, location, tracker.rectangle());
        ctx.resolve(toolkit, toolkit.cursor_control(), &query)
    }

    fn conclude(&mut self, target: Option<Box<dyn DropTarget>>) -> DragOutcome {
        match target {
            Some(target) => {
                self.phase = DragPhase::Committed;
                tracing::debug!(
                    drag_event = "committed",
                    cursor = target.cursor().as_str(),
                    moves = self.moves,
                    "drag committed"
                );
                DragOutcome::Committed(target)
            }
            None => {
                self.phase = DragPhase::Cancelled;
                tracing::debug!(
                    drag_event = "abandoned",
                    moves = self.moves,
                    "drag released without a target"
                );
                DragOutcome::Cancelled
            }
        }
    }
}
