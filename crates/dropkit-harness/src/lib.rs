#![forbid(unsafe_code)]

//! Deterministic test doubles for dropkit.
//!
//! - [`FakeToolkit`]: in-memory widget tree with hit testing and a pointer.
//! - [`ScriptedTracker`]: replays events, records feedback calls.
//! - [`RecordingListener`] / [`RecordingTarget`]: log notifications to a
//!   shared [`CallLog`].
//!
//! # Quick Start
//!
//! ```
//! use dropkit::{DragContext, DragPayload, DragRequest, Point, Rect, TrackerEvent};
//! use dropkit_harness::{CallLog, FakeToolkit, RecordingListener, as_listener};
//!
//! let mut tk = FakeToolkit::new();
//! let shell = tk.add_shell("shell", Rect::new(0, 0, 100, 100));
//! let log = CallLog::new();
//! let stack = RecordingListener::new("stack", &log).shared();
//!
//! let mut ctx = DragContext::new();
//! ctx.add_target(Some(shell), as_listener(&stack));
//!
//! let mut tracker = tk.tracker([TrackerEvent::Released(Point::new(50, 50))]);
//! let payload = DragPayload::view("x");
//! let request = DragRequest::new(payload, Rect::new(0, 0, 10, 10), Point::new(5, 5));
//! assert!(ctx.perform_drag(&tk, &mut tracker, request));
//! assert_eq!(log.entries(), vec!["stack:commit", "stack:cancel(true)"]);
//! ```

pub mod fixtures;
pub mod toolkit;
pub mod tracker;

pub use fixtures::{AcceptRule, CallLog, RecordingListener, RecordingTarget, SeenQuery, as_listener};
pub use toolkit::{FakeToolkit, WidgetId};
pub use tracker::{ScriptedTracker, TrackerCall};
