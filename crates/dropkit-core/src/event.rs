#![forbid(unsafe_code)]

//! Events delivered to a drag tracking session.
//!
//! A tracking session only cares about three things: the pointer moved, the
//! pointer was released, or the drag was called off. Hosts with their own
//! event model translate into [`TrackerEvent`]; terminal hosts can use
//! [`TrackerEvent::from_crossterm`].

#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

use crate::geometry::Point;

/// Why a tracking session was called off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The user pressed Escape.
    Escape,
    /// The window lost focus mid-drag.
    FocusLost,
    /// The host aborted the drag (window closing, modal dialog, ...).
    Host,
}

impl CancelReason {
    /// Stable lowercase name, used in structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::FocusLost => "focus_lost",
            Self::Host => "host",
        }
    }
}

/// Input relevant to an active drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    /// The pointer moved to the given display position.
    Moved(Point),
    /// The pointer button was released at the given display position.
    Released(Point),
    /// The drag was called off.
    Cancelled(CancelReason),
}

impl TrackerEvent {
    /// Returns true if this event ends a tracking session.
    ///
    /// Escape cancellations may still be ignored by the session when the
    /// configuration disables them.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Released(_) | Self::Cancelled(_))
    }

    /// Convert a Crossterm event into a [`TrackerEvent`].
    ///
    /// Mouse moves and drags become [`TrackerEvent::Moved`], a left-button
    /// release becomes [`TrackerEvent::Released`], a pressed Escape key and
    /// focus loss become cancellations. Everything else is irrelevant to a
    /// drag and maps to `None`.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Mouse(mouse) => map_mouse_event(mouse),
            cte::Event::Key(key)
                if key.code == cte::KeyCode::Esc && key.kind == cte::KeyEventKind::Press =>
            {
                Some(Self::Cancelled(CancelReason::Escape))
            }
            cte::Event::FocusLost => Some(Self::Cancelled(CancelReason::FocusLost)),
            _ => None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_mouse_event(event: cte::MouseEvent) -> Option<TrackerEvent> {
    let at = Point::new(i32::from(event.column), i32::from(event.row));
    match event.kind {
        cte::MouseEventKind::Moved | cte::MouseEventKind::Drag(_) => Some(TrackerEvent::Moved(at)),
        cte::MouseEventKind::Up(cte::MouseButton::Left) => Some(TrackerEvent::Released(at)),
        _ => None,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crossterm::event as ct_event;

    fn mouse(kind: ct_event::MouseEventKind, column: u16, row: u16) -> ct_event::Event {
        ct_event::Event::Mouse(ct_event::MouseEvent {
            kind,
            column,
            row,
            modifiers: ct_event::KeyModifiers::NONE,
        })
    }

    #[test]
    fn drag_and_move_map_to_moved() {
        let drag = mouse(
            ct_event::MouseEventKind::Drag(ct_event::MouseButton::Left),
            10,
            5,
        );
        assert_eq!(
            TrackerEvent::from_crossterm(drag),
            Some(TrackerEvent::Moved(Point::new(10, 5)))
        );
        let moved = mouse(ct_event::MouseEventKind::Moved, 3, 4);
        assert_eq!(
            TrackerEvent::from_crossterm(moved),
            Some(TrackerEvent::Moved(Point::new(3, 4)))
        );
    }

    #[test]
    fn left_release_maps_to_released() {
        let up = mouse(
            ct_event::MouseEventKind::Up(ct_event::MouseButton::Left),
            20,
            15,
        );
        assert_eq!(
            TrackerEvent::from_crossterm(up),
            Some(TrackerEvent::Released(Point::new(20, 15)))
        );
    }

    #[test]
    fn other_buttons_and_scroll_are_ignored() {
        let right_up = mouse(
            ct_event::MouseEventKind::Up(ct_event::MouseButton::Right),
            1,
            1,
        );
        assert_eq!(TrackerEvent::from_crossterm(right_up), None);
        let scroll = mouse(ct_event::MouseEventKind::ScrollDown, 1, 1);
        assert_eq!(TrackerEvent::from_crossterm(scroll), None);
    }

    #[test]
    fn escape_press_cancels() {
        let esc = ct_event::Event::Key(ct_event::KeyEvent::new(
            ct_event::KeyCode::Esc,
            ct_event::KeyModifiers::NONE,
        ));
        assert_eq!(
            TrackerEvent::from_crossterm(esc),
            Some(TrackerEvent::Cancelled(CancelReason::Escape))
        );

        let other = ct_event::Event::Key(ct_event::KeyEvent::new(
            ct_event::KeyCode::Char('q'),
            ct_event::KeyModifiers::NONE,
        ));
        assert_eq!(TrackerEvent::from_crossterm(other), None);
    }

    #[test]
    fn focus_lost_cancels() {
        assert_eq!(
            TrackerEvent::from_crossterm(ct_event::Event::FocusLost),
            Some(TrackerEvent::Cancelled(CancelReason::FocusLost))
        );
        assert_eq!(TrackerEvent::from_crossterm(ct_event::Event::FocusGained), None);
    }

    #[test]
    fn terminal_events() {
        assert!(!TrackerEvent::Moved(Point::default()).is_terminal());
        assert!(TrackerEvent::Released(Point::default()).is_terminal());
        assert!(TrackerEvent::Cancelled(CancelReason::Host).is_terminal());
        assert_eq!(CancelReason::FocusLost.as_str(), "focus_lost");
    }
}
