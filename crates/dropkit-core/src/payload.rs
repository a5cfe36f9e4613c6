#![forbid(unsafe_code)]

//! The dragged part.
//!
//! The drag machinery never looks inside a payload; it only hands it to
//! drag-over listeners, which decide whether they can take it. Listeners
//! usually match on the kind (`"view/part"`, `"editor/part"`) and look the
//! part up by id when the drop is committed.

/// Kind of a dragged view.
pub const VIEW_KIND: &str = "view/part";
/// Kind of a dragged editor.
pub const EDITOR_KIND: &str = "editor/part";

/// A dragged part: what it is, which one, and how to name it.
///
/// # Examples
///
/// ```
/// # use dropkit_core::payload::DragPayload;
/// let payload = DragPayload::view("org.example.navigator").with_label("Navigator");
/// assert!(payload.matches_kind("view/*"));
/// assert_eq!(payload.category(), "view");
/// assert_eq!(payload.part_id(), "org.example.navigator");
/// assert_eq!(payload.label(), "Navigator");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DragPayload {
    kind: String,
    part_id: String,
    label: Option<String>,
}

impl DragPayload {
    /// Payload of `kind` (`"category/subtype"`) for the part `part_id`.
    #[must_use]
    pub fn new(kind: impl Into<String>, part_id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            part_id: part_id.into(),
            label: None,
        }
    }

    /// A dragged view.
    #[must_use]
    pub fn view(part_id: impl Into<String>) -> Self {
        Self::new(VIEW_KIND, part_id)
    }

    /// A dragged editor.
    #[must_use]
    pub fn editor(part_id: impl Into<String>) -> Self {
        Self::new(EDITOR_KIND, part_id)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The part before the `/` of the kind, or the whole kind.
    #[must_use]
    pub fn category(&self) -> &str {
        self.kind
            .split_once('/')
            .map_or(self.kind.as_str(), |(category, _)| category)
    }

    #[must_use]
    pub fn part_id(&self) -> &str {
        &self.part_id
    }

    /// Label for previews and logs; the part id when none was given.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.part_id.as_str())
    }

    /// Returns true if the kind matches `pattern`.
    ///
    /// `"*"` and `"*/*"` match everything, `"view/*"` matches any kind in
    /// the `view` category, anything else must match exactly.
    #[must_use]
    pub fn matches_kind(&self, pattern: &str) -> bool {
        match pattern {
            "*" | "*/*" => true,
            _ => match pattern.strip_suffix("/*") {
                Some(category) => self.category() == category && self.kind.contains('/'),
                None => self.kind == pattern,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_and_editor_constructors() {
        let v = DragPayload::view("navigator");
        assert_eq!(v.kind(), VIEW_KIND);
        assert_eq!(v.part_id(), "navigator");
        assert_eq!(v.label(), "navigator");

        let e = DragPayload::editor("main.rs").with_label("main.rs (modified)");
        assert_eq!(e.kind(), EDITOR_KIND);
        assert_eq!(e.category(), "editor");
        assert_eq!(e.label(), "main.rs (modified)");
    }

    #[test]
    fn category_without_slash_is_whole_kind() {
        let p = DragPayload::new("marker", "m1");
        assert_eq!(p.category(), "marker");
        assert!(p.matches_kind("marker"));
        assert!(!p.matches_kind("marker/*"));
    }

    #[test]
    fn matches_exact_and_wildcard() {
        let p = DragPayload::view("outline");
        assert!(p.matches_kind("view/part"));
        assert!(p.matches_kind("view/*"));
        assert!(p.matches_kind("*"));
        assert!(p.matches_kind("*/*"));
        assert!(!p.matches_kind("editor/*"));
        assert!(!p.matches_kind("view/editor"));
    }

    #[test]
    fn wildcard_category_must_match_whole() {
        let p = DragPayload::new("viewer/part", "x");
        assert!(!p.matches_kind("view/*"));
    }
}
