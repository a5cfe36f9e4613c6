#![forbid(unsafe_code)]

//! Cursor glyphs shown while a drag is being tracked.
//!
//! The glyph is a selector only; the toolkit's tracker decides what each
//! glyph looks like on screen.

/// Cursor glyph a drop target asks the tracker to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorGlyph {
    /// No target accepts the drag at the current position.
    #[default]
    Invalid,
    /// Dock to the left of the hovered area.
    Left,
    /// Dock to the right of the hovered area.
    Right,
    /// Dock above the hovered area.
    Top,
    /// Dock below the hovered area.
    Bottom,
    /// Stack into the hovered area.
    Center,
    /// Detach into a free-floating window.
    Offscreen,
    /// Minimize into a fast view bar.
    FastView,
}

impl CursorGlyph {
    /// Stable lowercase name, used in structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
            Self::Offscreen => "offscreen",
            Self::FastView => "fastview",
        }
    }

    /// Returns true for every glyph except [`CursorGlyph::Invalid`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for CursorGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
