#![forbid(unsafe_code)]

//! Core: geometry, cursor glyphs, drag payloads, tracker events, and configuration.

pub mod config;
pub mod cursor;
pub mod event;
pub mod geometry;
pub mod payload;

pub use config::{ConfigError, DragConfig};
pub use cursor::CursorGlyph;
pub use event::{CancelReason, TrackerEvent};
pub use geometry::{Point, Rect};
pub use payload::DragPayload;
