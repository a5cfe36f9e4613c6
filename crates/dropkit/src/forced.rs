#![forbid(unsafe_code)]

//! Forced drop location for automated tests.
//!
//! When a [`DragContext`](crate::DragContext) holds a forced location, the
//! next drag skips interactive tracking altogether: it resolves a target at
//! the forced point, among the given top-level windows, and finishes
//! immediately. UI tests use this to exercise drop handling without
//! synthesizing pointer input.

use dropkit_core::geometry::Point;

/// A pre-declared drop point and the windows to search for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedDropLocation<W> {
    /// Drop point in display coordinates.
    pub location: Point,
    /// Top-level windows searched for the widget at `location`.
    pub shells: Vec<W>,
}

impl<W> ForcedDropLocation<W> {
    /// Create a forced location.
    #[must_use]
    pub fn new(location: Point, shells: impl IntoIterator<Item = W>) -> Self {
        Self {
            location,
            shells: shells.into_iter().collect(),
        }
    }
}
