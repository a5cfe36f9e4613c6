#![forbid(unsafe_code)]

//! Geometric primitives in display coordinates.
//!
//! Coordinates are signed: widgets on secondary monitors and rectangles
//! dragged past the left or top edge of the primary display have negative
//! origins. Widths and heights are signed too, because toolkits report
//! "no rectangle" as a zero or negative extent rather than an absent value.

/// A point in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self` as `(dx, dy)`.
    #[inline]
    pub const fn delta_from(&self, origin: Point) -> (i32, i32) {
        (
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A rectangle used for widget bounds, drag rectangles, and snap previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels. Zero or negative means "no rectangle".
    pub width: i32,
    /// Height in pixels. Zero or negative means "no rectangle".
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// True when both width and height are strictly positive.
    ///
    /// Snap rectangles and tracker seeds without extent mean "no preview".
    #[inline]
    pub const fn has_extent(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Check if the rectangle has no extent.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.has_extent()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        self.has_extent()
            && p.x >= self.x
            && p.x < self.right()
            && p.y >= self.y
            && p.y < self.bottom()
    }

    /// Same size, origin moved by `(dx, dy)`.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Same size, origin moved so it sits at `origin` + own origin.
    ///
    /// Converts a parent-relative rectangle into the coordinate space the
    /// parent origin is expressed in.
    #[inline]
    pub const fn relative_to(&self, origin: Point) -> Rect {
        self.translate(origin.x, origin.y)
    }
}
