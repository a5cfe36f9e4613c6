#![forbid(unsafe_code)]

//! Drag and drop between widgets of a desktop host.
//!
//! Widgets register [`DragOverListener`]s on a [`DragContext`]. While the
//! user drags, a [`DragSession`] follows the pointer, asks the listeners of
//! the widget under it (then its ancestors, then the default listeners)
//! whether they accept the drag, and shows the winning [`DropTarget`]'s
//! cursor and snap rectangle. On release the last target performs the drop.
//!
//! The host supplies the widget tree through [`WidgetToolkit`] and visual
//! feedback through [`Tracker`].
//!
//! # Example
//!
//! ```ignore
//! use dropkit::{DragContext, DragRequest, listener};
//!
//! let mut ctx = DragContext::new();
//! ctx.add_target(Some(editor_area), listener(|_, query| {
//!     query.payload.matches_kind("view/*").then(|| stack_target(query))
//! }));
//!
//! let dropped = ctx.perform_drag(&toolkit, &mut tracker, DragRequest::new(
//!     payload, tab_bounds, pointer,
//! ));
//! ```

pub mod context;
pub mod forced;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod target;
pub mod toolkit;

#[cfg(test)]
mod test_support;

pub use context::DragContext;
pub use forced::ForcedDropLocation;
pub use registry::TargetRegistry;
pub use session::{DragOutcome, DragPhase, DragRequest, DragSession, SessionStep};
pub use target::{DragOverListener, DropQuery, DropTarget, ListenerRef, listener};
pub use toolkit::{Tracker, TrackerFeedback, WidgetToolkit, display_bounds};

pub use dropkit_core::{
    CancelReason, ConfigError, CursorGlyph, DragConfig, DragPayload, Point, Rect, TrackerEvent,
};
