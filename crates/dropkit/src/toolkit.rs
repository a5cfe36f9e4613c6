#![forbid(unsafe_code)]

//! Seams to the host windowing toolkit.
//!
//! dropkit never owns widgets. It reads the widget hierarchy and pointer
//! state through [`WidgetToolkit`] and drives visual feedback through a
//! [`Tracker`], both implemented by the host.

use std::fmt::Debug;
use std::hash::Hash;

use dropkit_core::cursor::CursorGlyph;
use dropkit_core::event::TrackerEvent;
use dropkit_core::geometry::{Point, Rect};

/// Read access to the host's widget hierarchy and pointer.
pub trait WidgetToolkit {
    /// Opaque widget handle. Compared and hashed by identity.
    type Widget: Copy + Eq + Hash + Debug + 'static;

    /// Parent of `widget`, or `None` for a top-level window.
    fn parent(&self, widget: Self::Widget) -> Option<Self::Widget>;

    /// Bounds of `widget`, relative to its parent (display coordinates for a
    /// top-level window).
    fn bounds(&self, widget: Self::Widget) -> Rect;

    /// Convert `rect`, expressed relative to `reference`, into display
    /// coordinates.
    fn to_display(&self, reference: Self::Widget, rect: Rect) -> Rect;

    /// The widget currently under the pointer, if any.
    fn cursor_control(&self) -> Option<Self::Widget>;

    /// Current pointer position in display coordinates.
    fn cursor_location(&self) -> Point;

    /// The most specific widget at display point `at` among `shells` and
    /// their descendants.
    fn find_control(&self, shells: &[Self::Widget], at: Point) -> Option<Self::Widget>;
}

/// Visual feedback side of a rectangle tracker.
pub trait TrackerFeedback {
    /// The rectangle currently shown.
    fn rectangle(&self) -> Rect;

    /// Replace the rectangle shown.
    fn set_rectangle(&mut self, rect: Rect);

    /// Replace the cursor glyph shown.
    fn set_cursor(&mut self, cursor: CursorGlyph);
}

/// A modal rectangle tracker that can be polled for drag input.
pub trait Tracker: TrackerFeedback {
    /// Block until the next move, release, or cancellation.
    fn next_event(&mut self) -> TrackerEvent;
}

/// Bounds of `widget` in display coordinates.
///
/// Top-level windows already report display bounds; everything else is
/// converted through its parent.
pub fn display_bounds<T: WidgetToolkit + ?Sized>(toolkit: &T, widget: T::Widget) -> Rect {
    let bounds = toolkit.bounds(widget);
    match toolkit.parent(widget) {
        None => bounds,
        Some(parent) => toolkit.to_display(parent, bounds),
    }
}
