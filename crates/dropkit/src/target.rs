#![forbid(unsafe_code)]

//! Drop targets and the listeners that produce them.
//!
//! A [`DragOverListener`] is registered on a widget (or globally) and is
//! asked, on every pointer move, whether it wants the drag at the current
//! position. A positive answer is a [`DropTarget`]: the preview to show and
//! the action to run if the user releases there.
//!
//! # Lifecycle of a target
//!
//! Targets are produced freely during tracking and most are dropped without
//! notice. Only the target resolved when tracking ends is notified:
//!
//! - released over it: [`DropTarget::commit`], then
//!   [`DropTarget::cancel`] with `was_dropped = true`;
//! - drag cancelled: [`DropTarget::cancel`] with `was_dropped = false`.

use std::rc::Rc;

use dropkit_core::cursor::CursorGlyph;
use dropkit_core::geometry::{Point, Rect};
use dropkit_core::payload::DragPayload;

/// A candidate destination for the current drag.
pub trait DropTarget {
    /// Rectangle to preview, in display coordinates.
    ///
    /// A rectangle without extent means "no preview"; the tracker then
    /// follows the pointer with the source rectangle instead.
    fn snap_rectangle(&self) -> Rect {
        Rect::default()
    }

    /// Cursor glyph to show while this target is under the pointer.
    fn cursor(&self) -> CursorGlyph;

    /// Perform the drop.
    fn commit(&mut self);

    /// The drag is over. `was_dropped` is true after [`commit`](Self::commit).
    fn cancel(&mut self, _was_dropped: bool) {}
}

/// What a listener is asked about: the payload and where it is being dragged.
#[derive(Debug, Clone, Copy)]
pub struct DropQuery<'a> {
    /// The object being dragged.
    pub payload: &'a DragPayload,
    /// Pointer position in display coordinates.
    pub position: Point,
    /// The rectangle currently being dragged.
    pub drag_rect: Rect,
}

impl<'a> DropQuery<'a> {
    /// Create a query.
    #[must_use]
    pub const fn new(payload: &'a DragPayload, position: Point, drag_rect: Rect) -> Self {
        Self {
            payload,
            position,
            drag_rect,
        }
    }
}

/// Capability to claim drops for a widget or globally.
///
/// `widget` is the most specific widget under the pointer, not necessarily
/// the widget the listener is registered on: a listener on a window sees
/// drags over any of its descendants.
pub trait DragOverListener<W> {
    /// Return a target if this listener accepts the drag, `None` otherwise.
    fn try_accept(&self, widget: Option<W>, query: &DropQuery<'_>) -> Option<Box<dyn DropTarget>>;
}

impl<W, F> DragOverListener<W> for F
where
    F: for<'a, 'b> Fn(Option<W>, &'a DropQuery<'b>) -> Option<Box<dyn DropTarget>>,
{
    fn try_accept(&self, widget: Option<W>, query: &DropQuery<'_>) -> Option<Box<dyn DropTarget>> {
        self(widget, query)
    }
}

/// Shared listener handle. Registration and removal compare by identity.
pub type ListenerRef<W> = Rc<dyn DragOverListener<W>>;

/// Wrap a closure as a shareable listener.
pub fn listener<W, F>(f: F) -> ListenerRef<W>
where
    W: 'static,
    F: for<'a, 'b> Fn(Option<W>, &'a DropQuery<'b>) -> Option<Box<dyn DropTarget>> + 'static,
{
    Rc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stack {
        snap: Rect,
        log: Vec<String>,
    }

    impl DropTarget for Stack {
        fn snap_rectangle(&self) -> Rect {
            self.snap
        }

        fn cursor(&self) -> CursorGlyph {
            CursorGlyph::Center
        }

        fn commit(&mut self) {
            self.log.push("commit".to_string());
        }

        fn cancel(&mut self, was_dropped: bool) {
            self.log.push(format!("cancel dropped={was_dropped}"));
        }
    }

    struct Bare;

    impl DropTarget for Bare {
        fn cursor(&self) -> CursorGlyph {
            CursorGlyph::Offscreen
        }

        fn commit(&mut self) {}
    }

    #[test]
    fn default_snap_rectangle_is_no_preview() {
        assert!(!Bare.snap_rectangle().has_extent());
        let mut bare = Bare;
        bare.cancel(false);
    }

    #[test]
    fn target_callbacks_in_order() {
        let mut t = Stack {
            snap: Rect::new(0, 0, 10, 10),
            log: Vec::new(),
        };
        assert_eq!(t.snap_rectangle(), Rect::new(0, 0, 10, 10));
        t.commit();
        t.cancel(true);
        assert_eq!(t.log, vec!["commit", "cancel dropped=true"]);
    }

    #[test]
    fn closure_listener_sees_query() {
        let l: ListenerRef<u32> = listener(|widget: Option<u32>, q: &DropQuery<'_>| {
            if widget == Some(7) && q.payload.matches_kind("view/*") {
                Some(Box::new(Bare) as Box<dyn DropTarget>)
            } else {
                None
            }
        });
        let payload = DragPayload::view("outline");
        let q = DropQuery::new(&payload, Point::new(1, 2), Rect::default());
        assert!(l.try_accept(Some(7), &q).is_some());
        assert!(l.try_accept(Some(8), &q).is_none());
        assert!(l.try_accept(None, &q).is_none());
    }
}
