//! Property-based invariant tests for drag geometry (Point, Rect).
//!
//! 1. Translation preserves size.
//! 2. Translating by `delta_from` lands on the target point.
//! 3. A displaced rectangle keeps its offset to the pointer.
//! 4. `contains` implies extent and agrees with the edge definition.
//! 5. `relative_to` is translation by the origin.
//! 6. No panics on extreme coordinates.

use dropkit_core::geometry::{Point, Rect};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn coord() -> impl Strategy<Value = i32> {
    -10_000i32..=10_000
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (coord(), coord(), -50i32..=2_000, -50i32..=2_000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Displacement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_preserves_size(r in rect_strategy(), dx in coord(), dy in coord()) {
        let moved = r.translate(dx, dy);
        prop_assert_eq!(moved.width, r.width);
        prop_assert_eq!(moved.height, r.height);
        prop_assert_eq!(moved.has_extent(), r.has_extent());
    }

    #[test]
    fn translate_by_delta_lands_on_target(a in point_strategy(), b in point_strategy()) {
        let (dx, dy) = a.delta_from(b);
        prop_assert_eq!(Rect::new(b.x, b.y, 1, 1).translate(dx, dy).origin(), a);
        prop_assert_eq!(a.delta_from(a), (0, 0));
    }

    #[test]
    fn displaced_rect_tracks_pointer(
        source in rect_strategy(),
        start in point_strategy(),
        now in point_strategy(),
    ) {
        let (dx, dy) = now.delta_from(start);
        let displaced = source.translate(dx, dy);
        // The grab offset inside the rectangle is unchanged.
        prop_assert_eq!(
            now.delta_from(displaced.origin()),
            start.delta_from(source.origin())
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Hit testing and parent offsets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_requires_extent(r in rect_strategy(), p in point_strategy()) {
        if r.contains(p) {
            prop_assert!(r.has_extent());
            prop_assert!(p.x >= r.x && p.x < r.right());
            prop_assert!(p.y >= r.y && p.y < r.bottom());
        }
        if !r.has_extent() {
            prop_assert!(!r.contains(p), "{:?} has no extent but contains {:?}", r, p);
        }
        let inside = p.x >= r.x && p.x < r.right() && p.y >= r.y && p.y < r.bottom();
        prop_assert_eq!(r.contains(p), r.has_extent() && inside);
    }

    #[test]
    fn relative_to_is_translation(r in rect_strategy(), origin in point_strategy()) {
        prop_assert_eq!(r.relative_to(origin), r.translate(origin.x, origin.y));
        prop_assert_eq!(r.relative_to(Point::default()), r);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Extremes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn no_panic_on_extremes(
        x in any::<i32>(),
        y in any::<i32>(),
        w in any::<i32>(),
        h in any::<i32>(),
        px in any::<i32>(),
        py in any::<i32>(),
    ) {
        let r = Rect::new(x, y, w, h);
        let p = Point::new(px, py);
        let _ = r.contains(p);
        let _ = r.translate(px, py);
        let _ = p.delta_from(r.origin());
        let _ = r.right();
        let _ = r.bottom();
    }
}
